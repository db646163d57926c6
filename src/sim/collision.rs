//! Landing detection between the actor and a platform
//!
//! Axis-aligned test with downward-bounce semantics: only the actor's
//! bottom edge can land, and only while it lies between the platform's
//! top edge and a small buffer below its bottom edge. The caller gates
//! on the actor falling; an ascending actor never lands.

use crate::consts::{ACTOR_WIDTH, LANDING_BUFFER, PLATFORM_HEIGHT, PLATFORM_WIDTH};

use super::state::{Actor, Platform};

/// True when the actor's bottom edge is crossing the platform's landing band
pub fn lands_on(actor: &Actor, platform: &Platform) -> bool {
    actor.pos.x < platform.pos.x + PLATFORM_WIDTH
        && actor.pos.x + ACTOR_WIDTH > platform.pos.x
        && actor.bottom() > platform.pos.y
        && actor.bottom() < platform.pos.y + PLATFORM_HEIGHT + LANDING_BUFFER
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, DeviceProfile};
    use crate::consts::ACTOR_HEIGHT;
    use glam::Vec2;

    fn actor_with_bottom_at(x: f32, bottom: f32) -> Actor {
        let config = Config::for_profile(DeviceProfile::Desktop);
        let mut actor = Actor::spawn(&config);
        actor.pos = Vec2::new(x, bottom - ACTOR_HEIGHT);
        actor
    }

    #[test]
    fn test_lands_inside_band() {
        let platform = Platform::new(100.0, 400.0);
        // Bottom edge just below the platform top, spans overlapping
        let actor = actor_with_bottom_at(80.0, 401.0);
        assert!(lands_on(&actor, &platform));
    }

    #[test]
    fn test_lands_within_buffer_below_bottom_edge() {
        let platform = Platform::new(100.0, 400.0);
        let band_end = 400.0 + PLATFORM_HEIGHT + LANDING_BUFFER;

        let inside = actor_with_bottom_at(80.0, band_end - 0.5);
        assert!(lands_on(&inside, &platform));

        let past = actor_with_bottom_at(80.0, band_end);
        assert!(!lands_on(&past, &platform));
    }

    #[test]
    fn test_bottom_edge_at_platform_top_misses() {
        let platform = Platform::new(100.0, 400.0);
        let actor = actor_with_bottom_at(80.0, 400.0);
        assert!(!lands_on(&actor, &platform));
    }

    #[test]
    fn test_horizontal_miss() {
        let platform = Platform::new(100.0, 400.0);

        // Fully to the left
        let left = actor_with_bottom_at(100.0 - ACTOR_WIDTH, 405.0);
        assert!(!lands_on(&left, &platform));

        // Fully to the right
        let right = actor_with_bottom_at(100.0 + PLATFORM_WIDTH, 405.0);
        assert!(!lands_on(&right, &platform));

        // One pixel of overlap counts
        let grazing = actor_with_bottom_at(100.0 - ACTOR_WIDTH + 1.0, 405.0);
        assert!(lands_on(&grazing, &platform));
    }
}
