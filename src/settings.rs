//! Gameplay tuning
//!
//! Defaults mirror `consts`; a JSON file beside the high score lets the
//! numbers be tweaked without recompiling. Loaded once at startup and
//! never mutated afterwards.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts;

/// Startup-time gameplay configuration
///
/// Every field has a serde default, so a partial file only overrides the
/// knobs it names. `spawn_interval_ticks` must be nonzero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Gravity per tick (negative = downward)
    pub gravity: f32,
    /// Vertical velocity set by a flap
    pub flap_strength: f32,
    /// Horizontal obstacle speed per tick
    pub scroll_speed: f32,
    /// Vertical opening in each obstacle
    pub gap_height: f32,
    pub obstacle_width: f32,
    /// Ticks between obstacle spawns
    pub spawn_interval_ticks: u64,
    /// Gap centers are drawn uniformly from plus/minus this range
    pub gap_center_range: f32,
    pub screen_width: f32,
    pub screen_height: f32,
    pub avatar_x: f32,
    pub avatar_radius: f32,
    /// Logical tick duration in milliseconds
    pub tick_ms: u64,
    /// Ticks the game-over screen is held before the start prompt returns
    pub game_over_hold_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: consts::GRAVITY,
            flap_strength: consts::FLAP_STRENGTH,
            scroll_speed: consts::PIPE_SPEED,
            gap_height: consts::PIPE_GAP,
            obstacle_width: consts::PIPE_WIDTH,
            spawn_interval_ticks: consts::PIPE_INTERVAL,
            gap_center_range: consts::GAP_CENTER_RANGE,
            screen_width: consts::SCREEN_WIDTH,
            screen_height: consts::SCREEN_HEIGHT,
            avatar_x: consts::AVATAR_X,
            avatar_radius: consts::AVATAR_RADIUS,
            tick_ms: consts::TICK_MS,
            game_over_hold_ticks: consts::GAME_OVER_HOLD_TICKS,
        }
    }
}

impl Tuning {
    /// Load from a JSON file, falling back to defaults on any problem.
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("ignoring malformed tuning file {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Write the current values as pretty JSON. Failure is logged, never fatal.
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("could not save tuning to {}: {}", path.display(), err);
                }
            }
            Err(err) => log::warn!("could not serialize tuning: {}", err),
        }
    }
}
