//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::settings::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Start prompt shown, waiting for the player
    Idle,
    /// Active gameplay
    Playing,
    /// Run ended, held briefly before returning to the prompt
    GameOver,
}

/// Cosmetic background variant, re-rolled for every session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    Day,
    Night,
}

/// The player's avatar
///
/// Horizontal position is fixed for the avatar's lifetime; only the
/// vertical axis is simulated.
#[derive(Debug, Clone)]
pub struct Avatar {
    pub pos: Vec2,
    pub vel_y: f32,
}

impl Avatar {
    pub fn new(x: f32) -> Self {
        Self {
            pos: Vec2::new(x, 0.0),
            vel_y: 0.0,
        }
    }

    /// Kick the avatar upward. Replaces the current velocity outright.
    pub fn flap(&mut self, strength: f32) {
        self.vel_y = strength;
    }

    /// Apply one tick of gravity, then advance by the new velocity.
    /// No bounds clamping here; bounds are the collision module's job.
    pub fn update(&mut self, gravity: f32) {
        self.vel_y += gravity;
        self.pos.y += self.vel_y;
    }
}

/// A gapped obstacle pair scrolling right to left
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub x: f32,
    /// Vertical center of the opening, fixed for the obstacle's lifetime
    pub gap_center_y: f32,
    /// Set once when the avatar passes; guards scoring
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, gap_center_y: f32) -> Self {
        Self {
            x,
            gap_center_y,
            passed: false,
        }
    }

    /// Scroll left by one tick's worth of movement.
    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }

    /// True once the obstacle has fully left the playfield.
    pub fn is_offscreen(&self, half_screen_width: f32, width: f32) -> bool {
        self.x < -half_screen_width - width
    }
}

/// Current and best score
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreState {
    pub current: u32,
    pub best: u32,
}

impl ScoreState {
    /// Count an obstacle the first time it slides past the avatar.
    ///
    /// The `passed` flag makes this fire at most once per obstacle.
    pub fn maybe_score(&mut self, obstacle: &mut Obstacle, avatar_x: f32) -> Option<GameEvent> {
        if obstacle.passed || obstacle.x >= avatar_x {
            return None;
        }
        obstacle.passed = true;
        self.current += 1;
        if self.current > self.best {
            self.best = self.current;
            Some(GameEvent::NewBest(self.best))
        } else {
            Some(GameEvent::Scored(self.current))
        }
    }
}

/// Things that happened during a tick that the frontend may react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A session left the start prompt
    SessionStarted,
    /// The avatar flapped
    Flapped,
    /// An obstacle was passed; carries the new current score
    Scored(u32),
    /// The best score improved; carries the value to persist
    NewBest(u32),
    /// The avatar hit an obstacle or the playfield edge
    Collided,
    /// The game-over hold expired; the start prompt is back
    ReadyToRestart,
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Startup-time gameplay configuration
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub avatar: Avatar,
    /// Active obstacles in spawn order (oldest first)
    pub obstacles: Vec<Obstacle>,
    pub score: ScoreState,
    /// Ticks elapsed in the current session
    pub tick_count: u64,
    /// Ticks remaining on the game-over screen
    pub hold_ticks: u32,
    pub backdrop: Backdrop,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game at the start prompt with default tuning.
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let backdrop = roll_backdrop(&mut rng);
        Self {
            seed,
            phase: GamePhase::Idle,
            avatar: Avatar::new(tuning.avatar_x),
            obstacles: Vec::new(),
            score: ScoreState::default(),
            tick_count: 0,
            hold_ticks: 0,
            backdrop,
            tuning,
            rng,
        }
    }

    /// Reset everything that belongs to a single session and enter Playing.
    pub fn begin_session(&mut self) {
        self.avatar = Avatar::new(self.tuning.avatar_x);
        self.obstacles.clear();
        self.tick_count = 0;
        self.score.current = 0;
        self.backdrop = roll_backdrop(&mut self.rng);
        self.phase = GamePhase::Playing;
    }

    /// Fresh avatar and backdrop for the restart prompt.
    pub fn prepare_restart(&mut self) {
        self.avatar = Avatar::new(self.tuning.avatar_x);
        self.obstacles.clear();
        self.backdrop = roll_backdrop(&mut self.rng);
        self.phase = GamePhase::Idle;
    }

    /// Spawn a new obstacle just past the right screen edge.
    pub fn spawn_obstacle(&mut self) {
        let x = self.tuning.screen_width / 2.0 + self.tuning.obstacle_width;
        let range = self.tuning.gap_center_range;
        let gap_center_y = self.rng.random_range(-range..=range);
        self.obstacles.push(Obstacle::new(x, gap_center_y));
    }
}

fn roll_backdrop(rng: &mut Pcg32) -> Backdrop {
    if rng.random_bool(0.5) {
        Backdrop::Day
    } else {
        Backdrop::Night
    }
}
