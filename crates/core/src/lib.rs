//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake simulation: movement, boundary policies,
//! collision, food consumption, scoring and the speed ramp.
//! It has **zero dependencies** on timers, input, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical food sequences
//! - **Total**: Illegal requests (reversal, moves while not playing) are no-ops, never errors
//! - **Immutable**: Every transition returns a new [`GameState`]; inputs are never mutated
//!
//! # Module Structure
//!
//! - [`game_state`]: The snapshot type plus `initial_state`, `advance`, `apply_direction`
//! - [`food`]: Uniform food placement by rejection sampling with a bounded fallback
//! - [`rng`]: Seeded LCG carried inside the state
//! - [`snapshot`]: Live-status payload built from a state
//!
//! # Game Rules
//!
//! - **Grid**: 20x20 cells
//! - **Walls mode**: stepping off the grid ends the game
//! - **Pass-through mode**: the grid wraps on both axes
//! - **Self-collision**: moving onto any current body cell (tail included) ends the game
//! - **Food**: +10 points, snake grows by one, tick interval drops 3ms (min 50ms)
//!
//! # Example
//!
//! ```
//! use snake_arena_core::GameState;
//! use snake_arena_types::{Direction, GameMode, GameStatus, Position};
//!
//! let game = GameState::new(GameMode::Walls, 12345).with_status(GameStatus::Playing);
//!
//! let game = game.apply_direction(Direction::Down).advance();
//! assert_eq!(game.head(), Position::new(10, 11));
//!
//! // Reversing straight back up is ignored.
//! let game = game.apply_direction(Direction::Up);
//! assert_eq!(game.direction(), Direction::Down);
//! ```

pub mod food;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use snake_arena_types as types;

// Re-export commonly used types for convenience
pub use food::place_food;
pub use game_state::{advance, apply_direction, initial_state, Body, GameState};
pub use rng::SimpleRng;
