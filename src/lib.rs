//! Triad (workspace facade crate).
//!
//! This package keeps the `triad::{core, engine, types}` public API in one
//! place while the implementation lives in dedicated crates under `crates/`.

pub use triad_core as core;
pub use triad_engine as engine;
pub use triad_types as types;
