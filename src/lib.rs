//! Gapwing - a side-scrolling gap-threading arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: Terminal rendering frontend
//! - `highscores`: Best-score persistence
//! - `settings`: Data-driven gameplay tuning

pub mod highscores;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScoreStore;
pub use settings::Tuning;

/// Game configuration constants
///
/// World units are screen pixels with the origin at the center of the
/// playfield and y pointing up. Velocities are per tick.
pub mod consts {
    /// Logical tick duration in milliseconds (fixed-step simulation)
    pub const TICK_MS: u64 = 20;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Gravity applied to the avatar once per tick (negative = downward)
    pub const GRAVITY: f32 = -0.6;
    /// Vertical velocity set by a flap
    pub const FLAP_STRENGTH: f32 = 10.0;
    /// Fixed horizontal position of the avatar
    pub const AVATAR_X: f32 = -100.0;
    /// Collision radius around the avatar center
    pub const AVATAR_RADIUS: f32 = 10.0;

    /// Horizontal scroll speed of obstacles
    pub const PIPE_SPEED: f32 = 5.0;
    /// Vertical opening the avatar must pass through
    pub const PIPE_GAP: f32 = 150.0;
    /// Horizontal extent of an obstacle
    pub const PIPE_WIDTH: f32 = 60.0;
    /// Ticks between obstacle spawns
    pub const PIPE_INTERVAL: u64 = 105;
    /// Gap centers are drawn uniformly from plus/minus this range
    pub const GAP_CENTER_RANGE: f32 = 100.0;

    /// Ticks the game-over screen is held before the start prompt returns
    pub const GAME_OVER_HOLD_TICKS: u32 = 25;
}
