//! Device profiles and the per-session game configuration
//!
//! The profile is picked once at startup from the viewport width and
//! frozen for the session; a later resize does not change it.

/// Viewport width (CSS pixels) below which the mobile profile applies
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// The two hardcoded device profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceProfile {
    Mobile,
    Desktop,
}

impl DeviceProfile {
    /// One-time selection by viewport width
    pub fn from_viewport_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT {
            DeviceProfile::Mobile
        } else {
            DeviceProfile::Desktop
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceProfile::Mobile => "mobile",
            DeviceProfile::Desktop => "desktop",
        }
    }
}

/// Board geometry, physics and platform layout for one session
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub profile: DeviceProfile,
    /// Board dimensions (canvas pixels)
    pub board_width: f32,
    pub board_height: f32,
    /// Downward acceleration per frame
    pub gravity: f32,
    /// Vertical velocity assigned on a bounce (negative = upward)
    pub jump_impulse: f32,
    /// Platforms placed above the starting platform at game start
    pub platform_count: u32,
    /// Vertical interval between those platforms
    pub platform_spacing: f32,
}

impl Config {
    pub fn for_profile(profile: DeviceProfile) -> Self {
        match profile {
            // Smaller board, gentler physics, sparser platforms
            DeviceProfile::Mobile => Self {
                profile,
                board_width: 373.0,
                board_height: 715.0,
                gravity: 0.2,
                jump_impulse: -4.2,
                platform_count: 8,
                platform_spacing: 90.0,
            },
            DeviceProfile::Desktop => Self {
                profile,
                board_width: 540.0,
                board_height: 650.0,
                gravity: 0.3,
                jump_impulse: -6.0,
                platform_count: 10,
                platform_spacing: 75.0,
            },
        }
    }

    pub fn from_viewport_width(width: f64) -> Self {
        Self::for_profile(DeviceProfile::from_viewport_width(width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_breakpoint() {
        assert_eq!(
            DeviceProfile::from_viewport_width(500.0),
            DeviceProfile::Mobile
        );
        assert_eq!(
            DeviceProfile::from_viewport_width(767.9),
            DeviceProfile::Mobile
        );
        assert_eq!(
            DeviceProfile::from_viewport_width(768.0),
            DeviceProfile::Desktop
        );
        assert_eq!(
            DeviceProfile::from_viewport_width(1920.0),
            DeviceProfile::Desktop
        );
    }

    #[test]
    fn test_profile_physics_pairing() {
        let mobile = Config::for_profile(DeviceProfile::Mobile);
        let desktop = Config::for_profile(DeviceProfile::Desktop);

        // Mobile trades fewer platforms for wider spacing
        assert!(mobile.platform_count < desktop.platform_count);
        assert!(mobile.platform_spacing > desktop.platform_spacing);

        // Both impulses are upward, both gravities downward
        assert!(mobile.jump_impulse < 0.0 && desktop.jump_impulse < 0.0);
        assert!(mobile.gravity > 0.0 && desktop.gravity > 0.0);
    }
}
