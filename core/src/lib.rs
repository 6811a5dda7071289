#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use dealer::*;
pub use error::*;
pub use shuffle::*;
pub use storage::*;
pub use store::*;
pub use words::*;

mod board;
mod dealer;
mod error;
mod shuffle;
mod storage;
mod store;
mod words;

/// Single axis used for board width and height.
pub type Coord = u8;

/// Count type used for the number of cells on a board.
pub type CellCount = u16;

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub width: Coord,
    pub height: Coord,
}

impl BoardConfig {
    pub const DEFAULT_WIDTH: Coord = 4;
    pub const DEFAULT_HEIGHT: Coord = 4;

    pub const fn new_unchecked(width: Coord, height: Coord) -> Self {
        Self { width, height }
    }

    pub fn new(width: Coord, height: Coord) -> Self {
        Self::new_unchecked(width.max(1), height.max(1))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    /// Number of words a list must hold before a game can be dealt.
    pub fn required_words(&self) -> usize {
        self.total_cells().into()
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    Marked,
    Unmarked,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        true
    }

    pub const fn is_marked(self) -> bool {
        matches!(self, Self::Marked)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ResetOutcome {
    NoChange,
    Cleared,
}

impl ResetOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Cleared => true,
        }
    }
}
