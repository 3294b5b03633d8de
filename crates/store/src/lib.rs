//! Arena store module - leaderboard, live players and the sinks that feed them
//!
//! The game loop never talks to the store directly. It owns two sinks
//! ([`crate::engine::ScoreSink`], [`crate::engine::LiveStatusSink`]) handed to
//! it at construction; [`ArenaLink::sink`] produces channel-backed ones that
//! forward into a store task running on a private tokio runtime.
//!
//! # Flow
//!
//! ```text
//! GameController --(ArenaSink)--> mpsc --> run_store_task --> Arc<RwLock<ArenaStore>>
//!                                                                    |
//!                                         Spectator / leaderboard <--+
//! ```
//!
//! - A live status with `is_playing = true` upserts the player's snapshot.
//! - A live status with `is_playing = false` removes the player from the live table.
//! - A score creates a leaderboard entry with a fresh id and timestamp.
//!
//! # Example
//!
//! ```
//! use snake_arena_store::ArenaStore;
//! use snake_arena_types::GameMode;
//!
//! let mut store = ArenaStore::new();
//! store.add_score("u1", "viper", 120, GameMode::Walls).unwrap();
//! store.add_score("u2", "adder", 80, GameMode::Walls).unwrap();
//!
//! let board = store.leaderboard(Some(GameMode::Walls));
//! assert_eq!(board[0].username, "viper");
//! assert_eq!(store.user_high_score("u2", None), 80);
//! ```

pub mod error;
pub mod link;
pub mod spectator;
pub mod store;

pub use snake_arena_engine as engine;
pub use snake_arena_types as types;

pub use error::StoreError;
pub use link::{run_store_task, ArenaEvent, ArenaLink, ArenaSink};
pub use spectator::Spectator;
pub use store::ArenaStore;
