//! Game loop controller.
//!
//! Turns wall-clock time and input intents into ordered calls against the
//! pure transitions in [`snake_arena_core`], and publishes each resulting
//! snapshot to the live-status and score sinks.
//!
//! # Scheduling
//!
//! The controller is single-threaded and pull-driven: the front-end asks
//! [`GameController::next_deadline`] how long it may block on input, then
//! calls [`GameController::update`]. Ticks use one-shot deadlines re-armed
//! after every tick with the current speed, so the speed ramp takes effect on
//! the very next tick. Leaving `Playing` cancels both the tick and the
//! live-status heartbeat.
//!
//! # Example
//!
//! ```
//! use snake_arena_engine::{GameController, ManualClock};
//! use snake_arena_types::{Direction, GameMode, GameStatus};
//!
//! let clock = ManualClock::new();
//! let mut game = GameController::new(GameMode::PassThrough, 7, Box::new(clock.clone()));
//! game.start();
//! game.queue_direction(Direction::Down);
//!
//! clock.advance(200);
//! assert!(game.update());
//! assert_eq!(game.state().direction(), Direction::Down);
//! assert_eq!(game.state().status(), GameStatus::Playing);
//! ```

pub mod clock;
pub mod controller;
pub mod scheduler;
pub mod sink;

pub use snake_arena_core as core;
pub use snake_arena_types as types;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use controller::GameController;
pub use scheduler::Deadline;
pub use sink::{LiveStatusSink, NullSink, ScoreSink};
