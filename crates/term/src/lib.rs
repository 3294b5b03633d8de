//! Terminal front-end pieces for the snake game.
//!
//! Rendering goes through a plain framebuffer rather than a widget toolkit:
//! [`GameView`] turns a `GameState` into styled cells and
//! [`TerminalRenderer`] flushes only what changed since the last frame.
//! Grid cells are drawn 2 columns wide so the board looks square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use snake_arena_core as core;
pub use snake_arena_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{ArenaPanel, GameView, Viewport, LEADERBOARD_ROWS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
