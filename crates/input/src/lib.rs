//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`], plus the
//! spectator keys that never reach the game. Timing is not handled here: turns
//! are queued on the controller and applied one per tick.

pub mod map;

pub use snake_arena_types as types;

pub use map::{handle_key_event, handle_watch_key, should_quit, WatchStep};
