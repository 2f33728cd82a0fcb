//! Board snapshots - flat, comparable captures of grid state
//!
//! A snapshot is the kind id of every coordinate in row-major order, with a
//! sentinel for cleared cells. Hosts use it to mirror the logical grid into
//! their display layer; tests use it to assert that a rejected swap left the
//! board kind-for-kind identical.

use crate::board::Board;

/// Kind value standing in for a cleared (destroyed or unassigned) cell.
pub const EMPTY_KIND: u8 = u8::MAX;

/// Row-major capture of every coordinate's kind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardSnapshot {
    width: u8,
    height: u8,
    kinds: Vec<u8>,
}

impl BoardSnapshot {
    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Kind id at a coordinate, or `None` for the cleared sentinel.
    pub fn kind_at(&self, x: u8, y: u8) -> Option<u8> {
        let k = self.kinds[y as usize * self.width as usize + x as usize];
        if k == EMPTY_KIND {
            None
        } else {
            Some(k)
        }
    }

    /// Raw row-major kind grid.
    pub fn as_slice(&self) -> &[u8] {
        &self.kinds
    }
}

impl Board {
    /// Capture the grid into an existing snapshot, reusing its buffer.
    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.width = self.width();
        out.height = self.height();
        out.kinds.clear();
        out.kinds.reserve(self.cell_count());

        for pos in self.coords() {
            let id = self
                .get(pos.x as i16, pos.y as i16)
                .expect("in-bounds capture");
            let cell = self.cell(id);
            let k = match cell.kind() {
                Some(kind) if !cell.is_destroyed() => kind.0,
                _ => EMPTY_KIND,
            };
            out.kinds.push(k);
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut s = BoardSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
