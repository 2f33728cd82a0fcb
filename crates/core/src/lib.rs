//! Core board logic - pure, deterministic, and testable
//!
//! This crate contains the data half of the match-3 simulation: the grid,
//! match detection, and tile generation. It has **zero dependencies** on UI,
//! timing, or I/O, making it:
//!
//! - **Deterministic**: the same seed produces the same board and refills
//! - **Testable**: every rule is exercised without a host attached
//! - **Portable**: runs headless, in a terminal host, or behind a GUI
//!
//! # Module Structure
//!
//! - [`board`]: cell arena + coordinate slot table with stable tile identity
//! - [`detect`]: axis-walk run detection producing a deduplicated match set
//! - [`generate`]: constrained initial fill and unconstrained cascade refill
//! - [`rng`]: seeded LCG shared by both fill policies
//! - [`snapshot`]: flat kind-grid captures for hosts and state comparison
//!
//! # Identity model
//!
//! Tiles are arena entries addressed by [`CellId`](triad_types::CellId); the
//! grid maps coordinates to ids. When a tile drops, the mapping changes and
//! the id does not, so hosts can animate the same handle they were given at
//! construction. See [`board::Board::swap_cells`].
//!
//! # Example
//!
//! ```
//! use triad_core::{Board, TileGenerator, find_all_matches};
//!
//! let mut board = Board::new(8, 8);
//! let mut generator = TileGenerator::new(5, 12345);
//! generator.fill_board(&mut board);
//!
//! // A freshly generated board never starts with a match.
//! assert!(find_all_matches(&board).is_empty());
//! ```

pub mod board;
pub mod detect;
pub mod generate;
pub mod rng;
pub mod snapshot;

pub use triad_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Cell};
pub use detect::{find_all_matches, MatchSet};
pub use generate::TileGenerator;
pub use rng::SimpleRng;
pub use snapshot::{BoardSnapshot, EMPTY_KIND};
