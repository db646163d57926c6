//! Sky Hopper - a vertical-scrolling platform bouncer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `config`: Device profiles frozen at startup
//! - `input`: Input-state buffer written by event handlers, read per frame
//! - `renderer`: Canvas-2D rendering of sprites and the score
//! - `ui`: Game-over overlay with the restart control

pub mod config;
pub mod input;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod renderer;
#[cfg(target_arch = "wasm32")]
pub mod ui;

pub use config::{Config, DeviceProfile};
pub use input::InputState;
pub use sim::{GameEvent, GamePhase, GameState, step};

/// Game configuration constants
pub mod consts {
    /// Actor sprite dimensions (pixels)
    pub const ACTOR_WIDTH: f32 = 130.0;
    pub const ACTOR_HEIGHT: f32 = 80.0;

    /// Platform sprite dimensions (pixels)
    pub const PLATFORM_WIDTH: f32 = 70.0;
    pub const PLATFORM_HEIGHT: f32 = 18.0;

    /// Horizontal speed applied by any steering input (pixels per frame)
    pub const RUN_SPEED: f32 = 4.0;

    /// Accumulated horizontal touch travel before a swipe registers (pixels)
    pub const SWIPE_THRESHOLD: f32 = 20.0;
    /// Device tilt dead zone (degrees of gamma)
    pub const TILT_THRESHOLD: f32 = 15.0;

    /// Extra reach below a platform's bottom edge that still counts as a
    /// landing, keeps bounces smooth across frames
    pub const LANDING_BUFFER: f32 = 5.0;

    /// Per-frame score roll is drawn from [0, SCORE_ROLL_MAX)
    pub const SCORE_ROLL_MAX: u32 = 50;
}
