//! Input-state buffer shared between the event handlers and the frame step
//!
//! Handlers (touch, tilt, keyboard, restart control) only ever write
//! scalar fields here; the frame step reads the buffer once per frame.
//! Last write wins, matching the single-threaded host. One-shot flags
//! are cleared by the host after each processed frame.

use crate::consts::{RUN_SPEED, SWIPE_THRESHOLD, TILT_THRESHOLD};
use crate::sim::Facing;

/// Input state written asynchronously by the input collaborators
#[derive(Debug, Clone)]
pub struct InputState {
    /// Commanded horizontal velocity (pixels per frame), persists until
    /// the next steering write
    pub steer_x: f32,
    /// Sprite facing implied by the latest steering input
    pub facing: Facing,
    /// One-shot tap/click: manual jump while playing, reset while game over
    pub tap: bool,
    /// One-shot restart request (action key or restart control); ignored
    /// unless the game is over
    pub restart: bool,
    /// clientX where the active swipe began; cleared on touch end
    swipe_origin: Option<f32>,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            steer_x: 0.0,
            facing: Facing::Right,
            tap: false,
            restart: false,
            swipe_origin: None,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keyboard steering and the restart action key
    pub fn key_down(&mut self, code: &str) {
        match code {
            "ArrowRight" | "KeyD" => {
                self.steer_x = RUN_SPEED;
                self.facing = Facing::Right;
            }
            "ArrowLeft" | "KeyA" => {
                self.steer_x = -RUN_SPEED;
                self.facing = Facing::Left;
            }
            "Space" => self.restart = true,
            _ => {}
        }
    }

    /// Tap or click anywhere on the board
    pub fn touch_start(&mut self) {
        self.tap = true;
    }

    /// Touch drag; steering registers once the accumulated horizontal
    /// delta from the swipe origin passes the threshold
    pub fn swipe_move(&mut self, client_x: f32) {
        let origin = *self.swipe_origin.get_or_insert(client_x);
        let delta = client_x - origin;

        if delta > SWIPE_THRESHOLD {
            self.steer_x = RUN_SPEED;
            self.facing = Facing::Right;
        } else if delta < -SWIPE_THRESHOLD {
            self.steer_x = -RUN_SPEED;
            self.facing = Facing::Left;
        }
    }

    /// Touch lifted; the next drag starts a fresh swipe
    pub fn swipe_end(&mut self) {
        self.swipe_origin = None;
    }

    /// Device tilt (gamma, degrees). Inside the dead zone the actor
    /// stops but keeps its facing.
    pub fn tilt(&mut self, gamma: f32) {
        if gamma > TILT_THRESHOLD {
            self.steer_x = RUN_SPEED;
            self.facing = Facing::Right;
        } else if gamma < -TILT_THRESHOLD {
            self.steer_x = -RUN_SPEED;
            self.facing = Facing::Left;
        } else {
            self.steer_x = 0.0;
        }
    }

    /// Clear one-shot flags after the frame step has consumed them
    pub fn clear_transient(&mut self) {
        self.tap = false;
        self.restart = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_right_past_threshold() {
        let mut input = InputState::new();
        input.swipe_move(100.0);
        input.swipe_move(125.0);
        assert_eq!(input.steer_x, RUN_SPEED);
        assert_eq!(input.facing, Facing::Right);
    }

    #[test]
    fn test_swipe_left_past_threshold() {
        let mut input = InputState::new();
        input.swipe_move(100.0);
        input.swipe_move(75.0);
        assert_eq!(input.steer_x, -RUN_SPEED);
        assert_eq!(input.facing, Facing::Left);
    }

    #[test]
    fn test_swipe_below_threshold_is_ignored() {
        let mut input = InputState::new();
        input.swipe_move(100.0);
        input.swipe_move(110.0);
        assert_eq!(input.steer_x, 0.0);
        assert_eq!(input.facing, Facing::Right);
    }

    #[test]
    fn test_swipe_origin_resets_on_touch_end() {
        let mut input = InputState::new();
        input.swipe_move(100.0);
        input.swipe_move(125.0);
        input.swipe_end();

        // New swipe measures from its own origin, 10 px is not enough
        input.swipe_move(200.0);
        input.swipe_move(210.0);
        assert_eq!(input.steer_x, RUN_SPEED); // unchanged from the first swipe
    }

    #[test]
    fn test_tilt_steering_and_dead_zone() {
        let mut input = InputState::new();
        input.tilt(30.0);
        assert_eq!(input.steer_x, RUN_SPEED);
        assert_eq!(input.facing, Facing::Right);

        input.tilt(-30.0);
        assert_eq!(input.steer_x, -RUN_SPEED);
        assert_eq!(input.facing, Facing::Left);

        // Neutral tilt stops the actor but keeps the facing
        input.tilt(5.0);
        assert_eq!(input.steer_x, 0.0);
        assert_eq!(input.facing, Facing::Left);
    }

    #[test]
    fn test_key_mapping() {
        let mut input = InputState::new();
        input.key_down("KeyA");
        assert_eq!(input.steer_x, -RUN_SPEED);
        input.key_down("ArrowRight");
        assert_eq!(input.steer_x, RUN_SPEED);
        assert_eq!(input.facing, Facing::Right);

        input.key_down("KeyQ");
        assert_eq!(input.steer_x, RUN_SPEED); // unknown keys change nothing

        assert!(!input.restart);
        input.key_down("Space");
        assert!(input.restart);
    }

    #[test]
    fn test_clear_transient_keeps_steering() {
        let mut input = InputState::new();
        input.key_down("ArrowLeft");
        input.touch_start();
        input.key_down("Space");
        input.clear_transient();

        assert!(!input.tap);
        assert!(!input.restart);
        assert_eq!(input.steer_x, -RUN_SPEED);
    }
}
