//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::Config;
use crate::consts::*;

/// Sprite variant the actor is facing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Actor fell below the board; waiting for a reset
    GameOver,
}

/// The player-controlled bouncing character
#[derive(Debug, Clone)]
pub struct Actor {
    /// Top-left corner, board-relative
    pub pos: Vec2,
    /// Pixels per frame; y is positive downward
    pub vel: Vec2,
    pub facing: Facing,
}

impl Actor {
    /// Fresh actor at the start position, already carrying the jump
    /// impulse so the first frames bounce upward
    pub fn spawn(config: &Config) -> Self {
        Self {
            pos: Vec2::new(
                config.board_width / 2.0 - ACTOR_WIDTH / 2.0,
                config.board_height * 7.0 / 8.0 - ACTOR_HEIGHT,
            ),
            vel: Vec2::new(0.0, config.jump_impulse),
            facing: Facing::Right,
        }
    }

    /// Bottom edge, the only edge that can land
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + ACTOR_HEIGHT
    }
}

/// A static surface the actor bounces off
#[derive(Debug, Clone)]
pub struct Platform {
    /// Top-left corner, board-relative
    pub pos: Vec2,
}

impl Platform {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }
}

/// Complete game state, owned by the frame stepper
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: Config,
    /// Session RNG: platform positions and the score roll
    pub rng: Pcg32,
    pub actor: Actor,
    /// Bottom-first sequence; index 0 is always the next platform to
    /// scroll off the board
    pub platforms: Vec<Platform>,
    /// Displayed score, high-water mark of the accumulator
    pub score: i64,
    /// Score accumulator; rises while ascending, falls while descending
    pub max_score: i64,
    pub phase: GamePhase,
    /// One-shot guard so the terminal overlay is signalled once per episode
    pub overlay_shown: bool,
    /// Contact flag gating the manual tap jump
    pub on_platform: bool,
}

impl GameState {
    /// Create a new game for the given session config and seed
    pub fn new(config: Config, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let platforms = super::platforms::place_initial(&mut rng, &config);

        Self {
            config,
            rng,
            actor: Actor::spawn(&config),
            platforms,
            score: 0,
            max_score: 0,
            phase: GamePhase::Playing,
            overlay_shown: false,
            on_platform: false,
        }
    }

    /// Back to the initial state shape: fresh actor, zeroed scores,
    /// cleared flags, regenerated platform layout. The session RNG keeps
    /// advancing so each run gets its own layout.
    pub fn reset(&mut self) {
        self.actor = Actor::spawn(&self.config);
        self.platforms = super::platforms::place_initial(&mut self.rng, &self.config);
        self.score = 0;
        self.max_score = 0;
        self.phase = GamePhase::Playing;
        self.overlay_shown = false;
        self.on_platform = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeviceProfile;

    #[test]
    fn test_actor_spawn_position() {
        let config = Config::for_profile(DeviceProfile::Desktop);
        let actor = Actor::spawn(&config);

        assert_eq!(actor.pos.x, config.board_width / 2.0 - ACTOR_WIDTH / 2.0);
        assert_eq!(
            actor.pos.y,
            config.board_height * 7.0 / 8.0 - ACTOR_HEIGHT
        );
        assert_eq!(actor.vel.y, config.jump_impulse);
        assert_eq!(actor.facing, Facing::Right);
    }

    #[test]
    fn test_new_game_shape() {
        let config = Config::for_profile(DeviceProfile::Mobile);
        let state = GameState::new(config, 7);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.max_score, 0);
        assert!(!state.overlay_shown);
        assert!(!state.on_platform);
        assert_eq!(
            state.platforms.len(),
            config.platform_count as usize + 1
        );
    }

    #[test]
    fn test_reset_restores_initial_shape() {
        let config = Config::for_profile(DeviceProfile::Desktop);
        let mut state = GameState::new(config, 99);

        state.actor.pos.y = config.board_height + 50.0;
        state.actor.vel = glam::Vec2::new(4.0, 9.0);
        state.score = 1234;
        state.max_score = -55;
        state.phase = GamePhase::GameOver;
        state.overlay_shown = true;
        state.on_platform = true;

        state.reset();

        let fresh = Actor::spawn(&config);
        assert_eq!(state.actor.pos, fresh.pos);
        assert_eq!(state.actor.vel, fresh.vel);
        assert_eq!(state.score, 0);
        assert_eq!(state.max_score, 0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.overlay_shown);
        assert!(!state.on_platform);
        assert_eq!(
            state.platforms.len(),
            config.platform_count as usize + 1
        );
    }
}
