//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per display-refresh callback
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod platforms;
pub mod state;
pub mod step;

pub use collision::lands_on;
pub use platforms::{place_initial, recycle, spawn_above};
pub use state::{Actor, Facing, GamePhase, GameState, Platform};
pub use step::{GameEvent, step};
