//! Tile generation - initial fill and cascade refill policies
//!
//! The two policies are intentionally different. The initial fill excludes
//! any kind that would complete a run of three with the two already-placed
//! cells behind it, so a fresh board never starts with a match. Refill draws
//! uniformly from the full kind set with no constraint, which is what lets
//! cascades chain through freshly spawned tiles.

use arrayvec::ArrayVec;
use triad_types::{CellId, TileKind, MAX_TILE_KINDS};

use crate::board::Board;
use crate::rng::SimpleRng;

/// Seeded source of tile kinds for one board.
#[derive(Debug, Clone)]
pub struct TileGenerator {
    rng: SimpleRng,
    kinds: u8,
}

impl TileGenerator {
    /// `kinds` must satisfy the board config bounds (`3..=MAX_TILE_KINDS`);
    /// [`BoardConfig::validate`](triad_types::BoardConfig::validate) is the
    /// gate for host-supplied values.
    pub fn new(kinds: u8, seed: u32) -> Self {
        debug_assert!(kinds >= 3 && kinds as usize <= MAX_TILE_KINDS);
        Self {
            rng: SimpleRng::new(seed),
            kinds,
        }
    }

    pub fn kinds(&self) -> u8 {
        self.kinds
    }

    /// Fill every cell of a board using the constrained starting policy.
    ///
    /// Cells are visited column by column, top to bottom, so the two cells
    /// behind the current one on each axis are always already assigned.
    pub fn fill_board(&mut self, board: &mut Board) {
        for x in 0..board.width() {
            for y in 0..board.height() {
                let id = board.get(x as i16, y as i16).expect("in-bounds fill");
                let kind = self.starting_kind(board, x, y);
                board.revive(id, kind);
            }
        }
    }

    /// Pick a starting kind for `(x, y)` from the candidates that do not
    /// complete a run with the two preceding cells in its row or column.
    fn starting_kind(&mut self, board: &Board, x: u8, y: u8) -> TileKind {
        let mut candidates: ArrayVec<TileKind, MAX_TILE_KINDS> =
            (0..self.kinds).map(TileKind).collect();

        if let Some(kind) = matching_pair(board, x as i16 - 1, x as i16 - 2, y as i16, y as i16) {
            candidates.retain(|&mut k| k != kind);
        }
        if let Some(kind) = matching_pair(board, x as i16, x as i16, y as i16 - 1, y as i16 - 2) {
            candidates.retain(|&mut k| k != kind);
        }

        self.rng.pick(&candidates)
    }

    /// Pick a refill kind: uniform over the whole set, no constraint.
    pub fn refill_kind(&mut self) -> TileKind {
        TileKind(self.rng.next_range(self.kinds as u32) as u8)
    }

    /// Refill every destroyed cell on the board, column by column and top to
    /// bottom, returning the refilled ids in that order.
    pub fn refill_destroyed(&mut self, board: &mut Board) -> Vec<CellId> {
        let mut refilled = Vec::new();
        for x in 0..board.width() {
            for y in 0..board.height() {
                let id = board.get(x as i16, y as i16).expect("in-bounds refill");
                if board.cell(id).is_destroyed() {
                    let kind = self.refill_kind();
                    board.revive(id, kind);
                    refilled.push(id);
                }
            }
        }
        refilled
    }
}

/// The shared kind of two same-kind cells, or `None` when out of bounds,
/// unassigned, or differing.
fn matching_pair(board: &Board, x1: i16, x2: i16, y1: i16, y2: i16) -> Option<TileKind> {
    let a = board.cell(board.get(x1, y1)?).kind()?;
    let b = board.cell(board.get(x2, y2)?).kind()?;
    if a == b {
        Some(a)
    } else {
        None
    }
}
