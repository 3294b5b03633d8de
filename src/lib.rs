//! Snake Arena (workspace facade crate).
//!
//! Re-exports the workspace crates as `snake_arena::{core,engine,input,store,term,types}`
//! and hosts the binary's configuration.

pub mod config;

pub use snake_arena_core as core;
pub use snake_arena_engine as engine;
pub use snake_arena_input as input;
pub use snake_arena_store as store;
pub use snake_arena_term as term;
pub use snake_arena_types as types;
