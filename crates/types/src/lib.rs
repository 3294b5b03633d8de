//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behaviour beyond small helpers, making them
//! usable in any context (simulation, loop controller, rendering, arena store).
//!
//! # Grid
//!
//! The playfield is a square grid of [`GRID_SIZE`] cells per side, indexed
//! `0..GRID_SIZE` on both axes. `y` grows downwards, so [`Direction::Up`]
//! decrements `y`.
//!
//! # Simulation Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_SIZE` | 20 | Grid side length |
//! | `INITIAL_SPEED_MS` | 200 | Tick interval at the start of a session |
//! | `SPEED_DECREMENT_MS` | 3 | Interval reduction per food eaten |
//! | `MIN_SPEED_MS` | 50 | Fastest possible tick interval |
//! | `SCORE_PER_FOOD` | 10 | Score awarded per food eaten |
//! | `LIVE_STATUS_INTERVAL_MS` | 500 | Live-status heartbeat period |
//!
//! # Examples
//!
//! ```
//! use snake_arena_types::{Direction, GameMode, Position, GRID_SIZE};
//!
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! assert_eq!(GameMode::from_str("pass-through"), Some(GameMode::PassThrough));
//!
//! let p = Position::new(GRID_SIZE - 1, 0);
//! assert!(p.in_bounds());
//! assert!(!p.offset(Direction::Right).in_bounds());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Grid side length in cells (20x20)
pub const GRID_SIZE: i8 = 20;

/// Total number of cells on the grid
pub const GRID_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Tick interval at session start in milliseconds
pub const INITIAL_SPEED_MS: u32 = 200;

/// Tick interval reduction per food eaten
pub const SPEED_DECREMENT_MS: u32 = 3;

/// Tick interval floor
pub const MIN_SPEED_MS: u32 = 50;

/// Score awarded for each food eaten
pub const SCORE_PER_FOOD: u32 = 10;

/// Period of the live-status heartbeat while playing
pub const LIVE_STATUS_INTERVAL_MS: u64 = 500;

/// Rejection-sampling attempts before food placement falls back to scanning free cells
pub const MAX_FOOD_ATTEMPTS: u32 = 1024;

/// Head position of a freshly spawned snake
pub const INITIAL_HEAD: Position = Position { x: 10, y: 10 };

/// Segment count of a freshly spawned snake
pub const INITIAL_LENGTH: usize = 3;


/// A cell on the grid
///
/// Coordinates are signed so that a head stepping off the edge can be
/// represented before the boundary policy is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step along `dir` (may be off-grid)
    pub fn offset(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Check whether both coordinates lie in `[0, GRID_SIZE)`
    pub fn in_bounds(self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }

    /// Wrap both coordinates onto the grid (toroidal)
    pub fn wrapped(self) -> Self {
        Self {
            x: self.x.rem_euclid(GRID_SIZE),
            y: self.y.rem_euclid(GRID_SIZE),
        }
    }
}

/// Movement direction of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The reverse direction
    ///
    /// # Examples
    ///
    /// ```
    /// use snake_arena_types::Direction;
    ///
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::Down.opposite(), Direction::Up);
    /// ```
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Grid delta `(dx, dy)` for one step
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Boundary policy, fixed for a session
///
/// - **Walls**: leaving the grid ends the game
/// - **PassThrough**: the grid wraps around on both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    Walls,
    #[default]
    PassThrough,
}

impl GameMode {
    /// Parse mode from its wire name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use snake_arena_types::GameMode;
    ///
    /// assert_eq!(GameMode::from_str("walls"), Some(GameMode::Walls));
    /// assert_eq!(GameMode::from_str("Pass-Through"), Some(GameMode::PassThrough));
    /// assert_eq!(GameMode::from_str("wrap"), Some(GameMode::PassThrough));
    /// assert_eq!(GameMode::from_str("maze"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "walls" | "wall" => Some(GameMode::Walls),
            "pass-through" | "passthrough" | "wrap" => Some(GameMode::PassThrough),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Walls => "walls",
            GameMode::PassThrough => "pass-through",
        }
    }

    /// The other mode (used by the mode toggle key)
    pub fn toggled(self) -> Self {
        match self {
            GameMode::Walls => GameMode::PassThrough,
            GameMode::PassThrough => GameMode::Walls,
        }
    }
}

/// Session lifecycle
///
/// ```text
/// Idle --start--> Playing --pause--> Paused --resume--> Playing
/// Playing --collision--> GameOver --start--> Playing
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Idle,
    Playing,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Idle => "idle",
            GameStatus::Playing => "playing",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "game-over",
        }
    }
}

/// Player intents produced by input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Queue a direction change for a later tick
    Turn(Direction),
    /// Start a new session from idle/game over, otherwise toggle pause
    StartOrPause,
    /// Return to an idle session in the current mode
    Reset,
    /// Switch boundary policy (resets the session)
    ToggleMode,
}

/// Payload broadcast to the live-status sink while playing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStatus {
    pub score: u32,
    pub mode: GameMode,
    pub snake: Vec<Position>,
    pub food: Position,
    pub direction: Direction,
    pub is_playing: bool,
}

/// A recorded score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub score: u32,
    pub mode: GameMode,
    pub created_at: DateTime<Utc>,
}

/// Latest known state of another player, as seen by spectators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LivePlayer {
    pub id: String,
    pub username: String,
    pub score: u32,
    pub mode: GameMode,
    pub snake: Vec<Position>,
    pub food: Position,
    pub direction: Direction,
    pub is_playing: bool,
}

impl LivePlayer {
    pub fn from_status(id: &str, username: &str, status: &LiveStatus) -> Self {
        Self {
            id: id.to_string(),
            username: username.to_string(),
            score: status.score,
            mode: status.mode,
            snake: status.snake.clone(),
            food: status.food,
            direction: status.direction,
            is_playing: status.is_playing,
        }
    }
}

/// Authenticated player on whose behalf scores and live status are sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerIdentity {
    pub id: String,
    pub username: String,
}

impl PlayerIdentity {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
        }
    }
}
