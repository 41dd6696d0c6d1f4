//! Launch trajectory generation
//!
//! Every spawned object is tossed up from below the stage. The horizontal
//! velocity band depends on which quarter of the stage the spawn x falls in:
//! objects near the edges are thrown hard toward the middle, objects near the
//! center get a gentle push. That keeps the whole volley converging over the
//! playfield instead of flying off the sides.

use glam::Vec2;

use super::rng::GameRng;
use super::state::StageBounds;
use crate::consts::*;

/// Spawn position, velocity and spin for one launched object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launch {
    pub pos: Vec2,
    pub vel: Vec2,
    pub angular_vel: f32,
}

/// Draw a full random launch: spawn x, spin, then velocity by band.
pub fn random_launch(rng: &mut GameRng, bounds: &StageBounds) -> Launch {
    let x_min = SPAWN_MARGIN as i32;
    let x_max = (bounds.width - SPAWN_MARGIN) as i32;
    let x = rng.random_int(x_min, x_max) as f32;
    launch_for_x(rng, x, bounds)
}

/// Build the launch for a known spawn x. Split out so the band policy is
/// testable with pinned positions.
pub(crate) fn launch_for_x(rng: &mut GameRng, x: f32, bounds: &StageBounds) -> Launch {
    let angular_vel = rng.random_int(-6, 6) as f32 / 2.0;

    let x_speed = if x < bounds.width * 0.25 {
        rng.random_int(8, 15)
    } else if x < bounds.width * 0.5 {
        rng.random_int(3, 5)
    } else if x < bounds.width * 0.75 {
        -rng.random_int(3, 5)
    } else {
        -rng.random_int(8, 15)
    };
    let y_speed = rng.random_int(24, 32);

    Launch {
        pos: Vec2::new(x, SPAWN_Y),
        vel: Vec2::new(x_speed as f32, y_speed as f32) * LAUNCH_SPEED_SCALE,
        angular_vel,
    }
}
