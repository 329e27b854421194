//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{avatar_collides, avatar_out_of_bounds, obstacle_overlaps};
pub use state::{Avatar, Backdrop, GameEvent, GamePhase, GameState, Obstacle, ScoreState};
pub use tick::{TickInput, tick};
