//! Per-frame simulation step
//!
//! Invoked once per display-refresh callback. While the game is over the
//! step skips simulation and only arbitrates the terminal overlay and
//! reset requests.

use rand::Rng;

use super::{collision, platforms};
use super::state::{GamePhase, GameState};
use crate::consts::{ACTOR_WIDTH, SCORE_ROLL_MAX};
use crate::input::InputState;

/// Signals the host must act on after a frame step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Show the terminal overlay; emitted exactly once per game-over episode
    GameOver,
    /// A reset happened; dismiss the terminal overlay if it is up
    Restarted,
}

/// Advance the game by one frame
pub fn step(state: &mut GameState, input: &InputState) -> Option<GameEvent> {
    if state.phase == GamePhase::GameOver {
        if input.tap || input.restart {
            state.reset();
            return Some(GameEvent::Restarted);
        }
        if !state.overlay_shown {
            state.overlay_shown = true;
            return Some(GameEvent::GameOver);
        }
        return None;
    }

    let config = state.config;

    // Read the input buffer: steering is last-write-wins, the tap only
    // re-launches while the actor rests on a platform
    state.actor.vel.x = input.steer_x;
    state.actor.facing = input.facing;
    if input.tap && state.on_platform {
        state.actor.vel.y = config.jump_impulse;
        state.on_platform = false;
    }

    // Horizontal integration with wraparound at the board edges
    let actor = &mut state.actor;
    actor.pos.x += actor.vel.x;
    if actor.pos.x > config.board_width {
        actor.pos.x = 0.0;
    } else if actor.pos.x + ACTOR_WIDTH < 0.0 {
        actor.pos.x = config.board_width;
    }

    // Gravity, then the single game-over trigger
    actor.vel.y += config.gravity;
    actor.pos.y += actor.vel.y;
    if actor.pos.y > config.board_height {
        state.phase = GamePhase::GameOver;
    }

    // Camera illusion: while the actor climbs through the upper three
    // quarters, the world scrolls down by the jump impulse instead
    if state.actor.vel.y < 0.0 && state.actor.pos.y < config.board_height * 3.0 / 4.0 {
        for platform in &mut state.platforms {
            platform.pos.y -= config.jump_impulse;
        }
    }

    // Landings only count while falling
    for platform in &state.platforms {
        if state.actor.vel.y >= 0.0 && collision::lands_on(&state.actor, platform) {
            state.actor.vel.y = config.jump_impulse;
            state.on_platform = true;
        }
    }

    platforms::recycle(&mut state.platforms, &mut state.rng, &state.config);

    update_score(state);

    None
}

/// Random-roll scoring: ascending frames feed the accumulator and raise
/// the displayed score to its high-water mark, descending frames only
/// drain the accumulator. The displayed score never goes down here.
fn update_score(state: &mut GameState) {
    let points = state.rng.random_range(0..SCORE_ROLL_MAX) as i64;
    if state.actor.vel.y < 0.0 {
        state.max_score += points;
        if state.score < state.max_score {
            state.score = state.max_score;
        }
    } else {
        state.max_score -= points;
    }
}
