//! The BF tape

use std::collections::TryReserveError;

use crate::types::{Cell, Cursor, TAPE_SIZE};

/// The program memory: a fixed run of [`TAPE_SIZE`] cells, all zero at
/// creation. Owned by the caller for the duration of one execution; the
/// cursor type guarantees every index is in range, so access is infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Box<[Cell]>,
}

impl Tape {
    /// Allocate a zeroed tape. Fails (instead of aborting) if the
    /// allocation cannot be satisfied.
    pub fn new() -> Result<Self, TryReserveError> {
        let mut cells = Vec::new();
        cells.try_reserve_exact(TAPE_SIZE)?;
        cells.resize(TAPE_SIZE, Cell::default());
        Ok(Self {
            cells: cells.into_boxed_slice(),
        })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, cursor: Cursor) -> Cell {
        self.cells[cursor.index()]
    }

    pub fn set(&mut self, cursor: Cursor, value: Cell) {
        self.cells[cursor.index()] = value;
    }

    /// Add `diff` to the cell under `cursor`, wrapping.
    pub fn modify(&mut self, cursor: Cursor, diff: Cell) {
        self.cells[cursor.index()] += diff;
    }
}

#[cfg(test)]
mod tests {
    use super::Tape;
    use crate::types::{Cursor, TAPE_SIZE};

    #[test]
    fn test_tape() {
        let mut tape = Tape::new().unwrap();
        assert_eq!(tape.len(), TAPE_SIZE);

        let mut cursor = Cursor::new();
        cursor.advance();
        cursor.advance();
        assert_eq!(tape.get(cursor), 0.into());

        tape.set(cursor, 5.into());
        assert_eq!(tape.get(cursor), 5.into());
        tape.modify(cursor, 255.into());
        assert_eq!(tape.get(cursor), 4.into());
    }

    #[test]
    fn test_last_cell_reachable() {
        let mut tape = Tape::new().unwrap();
        let mut cursor = Cursor::new();
        cursor.retreat();
        assert_eq!(cursor.index(), TAPE_SIZE - 1);
        tape.modify(cursor, 200.into());
        assert_eq!(tape.get(cursor), 200.into());
    }
}
