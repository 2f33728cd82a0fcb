//! Match detection - finds all qualifying runs on the board
//!
//! From every live cell, walk outward along each of the four directions and
//! count contiguous same-kind neighbors. The two directions of an axis are
//! paired: a run exists on an axis when the origin plus its neighbors on that
//! axis reach three. Contributions from every origin are aggregated into one
//! deduplicated set, so a cell discovered from several origins (or on both
//! axes of one origin) appears exactly once.
//!
//! Destroyed cells are invisible here: never an origin, never a run member.
//! Board edges just end the walk.

use triad_types::{CellId, Coord, Direction, TileKind};

use crate::board::Board;

/// Neighbors needed on one axis, in addition to the origin, to form a run.
const AXIS_NEIGHBORS_FOR_RUN: usize = 2;

/// Deduplicated set of cells participating in any qualifying run, valid for
/// the board state it was computed from.
#[derive(Debug, Clone)]
pub struct MatchSet {
    members: Vec<CellId>,
    seen: Vec<bool>,
}

impl MatchSet {
    fn new(arena_size: usize) -> Self {
        Self {
            members: Vec::new(),
            seen: vec![false; arena_size],
        }
    }

    /// Insert, ignoring duplicates. Returns whether the id was new.
    fn insert(&mut self, id: CellId) -> bool {
        if self.seen[id.index()] {
            return false;
        }
        self.seen[id.index()] = true;
        self.members.push(id);
        true
    }

    pub fn contains(&self, id: CellId) -> bool {
        self.seen[id.index()]
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = CellId> + '_ {
        self.members.iter().copied()
    }

    pub fn as_slice(&self) -> &[CellId] {
        &self.members
    }
}

/// Scan the whole board and collect every cell that belongs to a run.
pub fn find_all_matches(board: &Board) -> MatchSet {
    let mut matches = MatchSet::new(board.cell_count());

    // Scratch buffer reused across origins.
    let mut axis_run: Vec<CellId> = Vec::new();

    for pos in board.coords() {
        let origin = board.get(pos.x as i16, pos.y as i16).expect("in-bounds scan");
        let cell = board.cell(origin);
        if cell.is_destroyed() {
            continue;
        }
        let Some(kind) = cell.kind() else {
            continue;
        };

        let mut origin_matched = false;
        for axis in [
            [Direction::Left, Direction::Right],
            [Direction::Up, Direction::Down],
        ] {
            axis_run.clear();
            for dir in axis {
                walk_run(board, pos, dir, kind, &mut axis_run);
            }
            if axis_run.len() >= AXIS_NEIGHBORS_FOR_RUN {
                origin_matched = true;
                for &id in &axis_run {
                    matches.insert(id);
                }
            }
        }

        if origin_matched {
            matches.insert(origin);
        }
    }

    matches
}

/// Accumulate contiguous same-kind live neighbors from `from` in `dir`.
fn walk_run(board: &Board, from: Coord, dir: Direction, kind: TileKind, out: &mut Vec<CellId>) {
    let mut pos = from;
    loop {
        let Some(id) = board.neighbor(pos, dir) else {
            return;
        };
        let cell = board.cell(id);
        if cell.is_destroyed() || cell.kind() != Some(kind) {
            return;
        }
        out.push(id);
        pos = cell.pos();
    }
}
