//! Swap validation - tentative swap with revert on no match
//!
//! A swap request is checked against the lock, the board bounds, and
//! adjacency before anything moves. The swap itself is tentative: the two
//! cells exchange positions, the whole board is scanned, and if no run
//! appeared the exchange is undone, leaving the grid exactly as it was.
//! Only an accepted swap enters the cascade engine.

use triad_core::{find_all_matches, Board};
use triad_types::{BoardError, Coord, SwapError};

use crate::cascade::CascadeEngine;
use crate::ports::FeedbackSink;

/// Result of a structurally valid swap request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The swap produced at least one run; the cascade engine has taken over
    /// and the board is locked until it settles.
    Accepted,
    /// The swap produced nothing and was reverted; the grid is unchanged.
    RejectedNoMatch,
}

/// Validate and apply a swap of two adjacent cells.
pub fn try_swap(
    board: &mut Board,
    cascade: &mut CascadeEngine,
    a: Coord,
    b: Coord,
    feedback: &mut dyn FeedbackSink,
) -> Result<SwapOutcome, SwapError> {
    if cascade.is_locked() {
        return Err(SwapError::Locked);
    }

    let id_a = board.cell_at(a.x as i16, a.y as i16).map_err(reject)?;
    let id_b = board.cell_at(b.x as i16, b.y as i16).map_err(reject)?;

    if !a.is_adjacent(b) {
        return Err(SwapError::NotAdjacent);
    }

    board.swap_cells(id_a, id_b).map_err(SwapError::Corrupted)?;

    if find_all_matches(board).is_empty() {
        // Put everything back; the caller gets a rejection cue, not an error.
        board.swap_cells(id_a, id_b).map_err(SwapError::Corrupted)?;
        log::debug!("swap {a} <-> {b} produced no match, reverted");
        feedback.swap_rejected();
        return Ok(SwapOutcome::RejectedNoMatch);
    }

    log::debug!("swap {a} <-> {b} accepted");
    feedback.swap_accepted();
    cascade.begin();
    Ok(SwapOutcome::Accepted)
}

fn reject(e: BoardError) -> SwapError {
    match e {
        BoardError::OutOfBounds { x, y } => SwapError::OutOfBounds { x, y },
        other => SwapError::Corrupted(other),
    }
}
