//! Collision predicates for the avatar, obstacles, and playfield bounds
//!
//! Horizontal and vertical overlap are tested independently (an axis band
//! against a gap interval, not a true rectangle intersection). Diagonal
//! near-misses therefore slip through; the forgiving feel is part of the
//! game and the test must stay this way.

use super::state::{Avatar, Obstacle};
use crate::settings::Tuning;

/// True if the avatar overlaps the solid part of an obstacle.
pub fn obstacle_overlaps(obstacle: &Obstacle, avatar_x: f32, avatar_y: f32, tuning: &Tuning) -> bool {
    let half_gap = tuning.gap_height / 2.0;
    (obstacle.x - avatar_x).abs() < tuning.obstacle_width / 2.0 + tuning.avatar_radius
        && (avatar_y > obstacle.gap_center_y + half_gap
            || avatar_y < obstacle.gap_center_y - half_gap)
}

/// True if `y` is above or below the playfield. Comparisons are strict;
/// sitting exactly on the edge is still in bounds.
pub fn avatar_out_of_bounds(y: f32, screen_height: f32) -> bool {
    y < -screen_height / 2.0 || y > screen_height / 2.0
}

/// Full per-tick collision test: playfield bounds plus every active obstacle.
pub fn avatar_collides(avatar: &Avatar, obstacles: &[Obstacle], tuning: &Tuning) -> bool {
    avatar_out_of_bounds(avatar.pos.y, tuning.screen_height)
        || obstacles
            .iter()
            .any(|o| obstacle_overlaps(o, avatar.pos.x, avatar.pos.y, tuning))
}
