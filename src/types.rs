//! Fundamental data types used throughout brainarbor

use std::{
    fmt::Display,
    num::Wrapping,
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// Number of cells on the tape.
pub const TAPE_SIZE: usize = 65535;

/// Maximum loop nesting depth accepted by the parser.
///
/// A policy limit, not a buffer size: the parser stacks grow on demand but
/// refuse to pass this depth.
pub const MAX_LOOP_DEPTH: usize = 512;

/// The tape cursor: an index into the tape.
///
/// Moving off either end wraps around to the other, so a cursor is always a
/// valid tape index. Mutated only by the move instructions.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Cursor(usize);

impl Cursor {
    /// Cursor at the start of the tape.
    pub fn new() -> Self {
        Self(0)
    }

    /// Move one cell to the right, wrapping at the end of the tape.
    pub fn advance(&mut self) {
        self.0 = (self.0 + 1) % TAPE_SIZE;
    }

    /// Move one cell to the left, wrapping at the start of the tape.
    pub fn retreat(&mut self) {
        self.0 = (self.0 + TAPE_SIZE - 1) % TAPE_SIZE;
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Cursor> for usize {
    fn from(value: Cursor) -> Self {
        value.0
    }
}

impl Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tape cell value (u8 with wrapping semantics).
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Cell(Wrapping<u8>);

impl Add for Cell {
    type Output = Cell;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Cell {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Cell {
    type Output = Cell;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Cell {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Self(Wrapping::<u8>(value.rem_euclid(256) as u8))
    }
}

impl From<u8> for Cell {
    fn from(value: u8) -> Self {
        Self(Wrapping::<u8>(value))
    }
}

impl From<Cell> for u8 {
    fn from(value: Cell) -> Self {
        value.0 .0
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
