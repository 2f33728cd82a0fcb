//! Cascade engine - swap validation and match resolution
//!
//! This crate is the control half of the simulation. It owns no pixels and
//! no clock: hosts call [`Game::tick`] (or [`CascadeEngine::tick`]) once per
//! scheduling tick, and the engine advances through its phases, fanning out
//! one presentation task per affected cell at each barrier and waiting until
//! the host has completed them all.
//!
//! # Module Structure
//!
//! - [`cascade`]: the clear/drop/fill/settle state machine and combo counter
//! - [`swap`]: adjacency checks and tentative swap with revert on no match
//! - [`tasks`]: the fan-out/fan-in ticket barrier
//! - [`ports`]: presenter, score and feedback traits plus headless impls
//! - [`game`]: facade owning board, generator and engine together
//!
//! # Host loop
//!
//! ```
//! use triad_engine::{Game, InstantFx, NullFeedback, TallyScore};
//! use triad_types::{BoardConfig, Coord};
//!
//! let mut game = Game::new(BoardConfig::default(), 42).unwrap();
//! let mut fx = InstantFx::new();
//! let mut score = TallyScore::new();
//! let mut feedback = NullFeedback;
//!
//! if game
//!     .try_swap(Coord::new(3, 4), Coord::new(3, 5), &mut feedback)
//!     .is_ok()
//! {
//!     while game.is_busy() {
//!         game.tick(&mut fx, &mut score).unwrap();
//!         for ticket in fx.drain_done() {
//!             game.task_done(ticket);
//!         }
//!     }
//! }
//! ```

pub mod cascade;
pub mod game;
pub mod ports;
pub mod swap;
pub mod tasks;

// Re-export commonly used types for convenience
pub use cascade::{CascadeEngine, Phase};
pub use game::Game;
pub use ports::{
    CountingFeedback, FeedbackSink, InstantFx, NullFeedback, Presenter, ScoreSink, TallyScore,
    Transition,
};
pub use swap::{try_swap, SwapOutcome};
pub use tasks::{TaskSet, TaskTicket};
