//! Board module - manages the tile grid
//!
//! The board is split in two: an arena of cells with stable identity, and a
//! slot table mapping each coordinate to the id of the cell occupying it.
//! A drop or swap exchanges slot entries and updates the cells' recorded
//! coordinates; the cells themselves are never moved in memory or recreated,
//! so a `CellId` handed to a presenter stays valid across the whole episode.
//!
//! Consistency rule: for every cell, `slots[slot of cell.pos] == id`. The two
//! views must always agree; [`Board::position_of`] verifies this and surfaces
//! disagreement as [`BoardError::MisplacedCell`] instead of guessing.

use triad_types::{BoardError, CellId, Coord, Direction, TileKind};

/// One tile slot's occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    kind: Option<TileKind>,
    destroyed: bool,
    pos: Coord,
}

impl Cell {
    /// Current kind, `None` while cleared.
    pub fn kind(&self) -> Option<TileKind> {
        self.kind
    }

    /// True from the moment the cell is matched until it is refilled.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// The coordinate this cell believes it occupies.
    pub fn pos(&self) -> Coord {
        self.pos
    }
}

/// The tile grid: cell arena plus coordinate slot table.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Arena, indexed by `CellId`. Never grows or shrinks after construction.
    cells: Vec<Cell>,
    /// Coordinate -> occupant id, row-major `y * width + x`.
    slots: Vec<CellId>,
}

impl Board {
    /// Create a board of empty (kindless) cells, one per coordinate.
    pub fn new(width: u8, height: u8) -> Self {
        let count = width as usize * height as usize;
        let mut cells = Vec::with_capacity(count);
        let mut slots = Vec::with_capacity(count);

        for i in 0..count {
            let x = (i % width as usize) as u8;
            let y = (i / width as usize) as u8;
            cells.push(Cell {
                kind: None,
                destroyed: false,
                pos: Coord::new(x, y),
            });
            slots.push(CellId(i as u32));
        }

        Self {
            width,
            height,
            cells,
            slots,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Total number of cells (also the arena size).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn slot_index(&self, pos: Coord) -> usize {
        pos.y as usize * self.width as usize + pos.x as usize
    }

    /// Checked coordinate lookup.
    pub fn cell_at(&self, x: i16, y: i16) -> Result<CellId, BoardError> {
        self.get(x, y).ok_or(BoardError::OutOfBounds { x, y })
    }

    /// Probe a coordinate; `None` when out of bounds.
    pub fn get(&self, x: i16, y: i16) -> Option<CellId> {
        if x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16 {
            return None;
        }
        let pos = Coord::new(x as u8, y as u8);
        Some(self.slots[self.slot_index(pos)])
    }

    /// The cell one step from `pos` in `dir`, if any.
    pub fn neighbor(&self, pos: Coord, dir: Direction) -> Option<CellId> {
        let (x, y) = pos.step(dir);
        self.get(x, y)
    }

    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.index()]
    }

    /// Identity lookup: where is this cell? Fails with `MisplacedCell` when
    /// the slot table disagrees with the cell's recorded coordinate, which
    /// means the board state is corrupted.
    pub fn position_of(&self, id: CellId) -> Result<Coord, BoardError> {
        let pos = self.cells[id.index()].pos;
        if self.slots[self.slot_index(pos)] != id {
            return Err(BoardError::MisplacedCell { cell: id });
        }
        Ok(pos)
    }

    /// Exchange the grid positions of two cells and update each cell's
    /// recorded coordinate to match. Pure bookkeeping; no other state moves.
    pub fn swap_cells(&mut self, a: CellId, b: CellId) -> Result<(), BoardError> {
        let pos_a = self.position_of(a)?;
        let pos_b = self.position_of(b)?;

        let slot_a = self.slot_index(pos_a);
        let slot_b = self.slot_index(pos_b);
        self.slots.swap(slot_a, slot_b);

        self.cells[a.index()].pos = pos_b;
        self.cells[b.index()].pos = pos_a;
        Ok(())
    }

    /// Assign a kind directly. Fixture setup and the initial fill go through
    /// here; gameplay mutation uses `mark_destroyed`/`revive`.
    pub fn set_kind(&mut self, id: CellId, kind: Option<TileKind>) {
        self.cells[id.index()].kind = kind;
    }

    /// Flag a matched cell. Its kind is cleared so it can no longer extend
    /// runs while it waits for the refill.
    pub fn mark_destroyed(&mut self, id: CellId) {
        let cell = &mut self.cells[id.index()];
        cell.destroyed = true;
        cell.kind = None;
    }

    /// Give a cleared cell a fresh kind and return it to play.
    pub fn revive(&mut self, id: CellId, kind: TileKind) {
        let cell = &mut self.cells[id.index()];
        cell.destroyed = false;
        cell.kind = Some(kind);
    }

    /// All cell ids, in arena order.
    pub fn ids(&self) -> impl Iterator<Item = CellId> {
        (0..self.cells.len() as u32).map(CellId)
    }

    /// All coordinates, row-major from the top-left.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let width = self.width;
        let height = self.height;
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }
}
