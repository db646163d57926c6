//! Platform placement and recycling
//!
//! The sequence stays bottom-first: the starting platform is pushed
//! first, every later platform sits higher, and recycling always removes
//! from the front while appending just above the visible board. After
//! the initial burst the sequence length is invariant.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Platform;
use crate::config::Config;
use crate::consts::{PLATFORM_HEIGHT, PLATFORM_WIDTH};

/// Vertical gap between the board bottom and the starting platform
const START_PLATFORM_RISE: f32 = 50.0;
/// Vertical gap between the board bottom and the first random platform
const LAYOUT_BASE_RISE: f32 = 150.0;

/// Uniform integer x in [0, boardWidth - platformWidth)
fn random_x(rng: &mut Pcg32, config: &Config) -> f32 {
    rng.random_range(0..(config.board_width - PLATFORM_WIDTH) as u32) as f32
}

/// Initial layout: the starting platform near the bottom with its left
/// edge at the horizontal center, then `platform_count` platforms at
/// random x going upward at fixed intervals.
pub fn place_initial(rng: &mut Pcg32, config: &Config) -> Vec<Platform> {
    let mut platforms = Vec::with_capacity(config.platform_count as usize + 1);

    platforms.push(Platform::new(
        config.board_width / 2.0,
        config.board_height - START_PLATFORM_RISE,
    ));

    for i in 0..config.platform_count {
        platforms.push(Platform::new(
            random_x(rng, config),
            config.board_height - config.platform_spacing * i as f32 - LAYOUT_BASE_RISE,
        ));
    }

    platforms
}

/// One replacement platform just above the top of the visible board
pub fn spawn_above(rng: &mut Pcg32, config: &Config) -> Platform {
    Platform::new(random_x(rng, config), -PLATFORM_HEIGHT)
}

/// Drop platforms that scrolled past the bottom bound, appending one
/// replacement per removal so the sequence length stays constant.
pub fn recycle(platforms: &mut Vec<Platform>, rng: &mut Pcg32, config: &Config) {
    while platforms
        .first()
        .is_some_and(|p| p.pos.y >= config.board_height)
    {
        platforms.remove(0);
        let fresh = spawn_above(rng, config);
        platforms.push(fresh);
    }
}
