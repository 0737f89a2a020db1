//! Board representation for Freestyle and Renju

pub mod bitboard;
pub mod board;
pub mod notation;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Largest supported board (19x19)
pub const MAX_BOARD_SIZE: usize = 19;
pub const MAX_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE; // 361

/// Supported board sizes. Any other size is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum BoardSize {
    #[default]
    Fifteen,
    Seventeen,
    Nineteen,
}

impl BoardSize {
    pub const ALL: [BoardSize; 3] = [BoardSize::Fifteen, BoardSize::Seventeen, BoardSize::Nineteen];

    /// Number of intersections along one side
    #[inline]
    pub const fn get(self) -> usize {
        match self {
            BoardSize::Fifteen => 15,
            BoardSize::Seventeen => 17,
            BoardSize::Nineteen => 19,
        }
    }

    #[inline]
    pub const fn cells(self) -> usize {
        self.get() * self.get()
    }

    /// Signed coordinate validity, for scans that step past an edge
    #[inline]
    pub fn contains(self, col: i32, row: i32) -> bool {
        let n = self.get() as i32;
        col >= 0 && col < n && row >= 0 && row < n
    }
}

impl TryFrom<u32> for BoardSize {
    type Error = BoardError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            15 => Ok(BoardSize::Fifteen),
            17 => Ok(BoardSize::Seventeen),
            19 => Ok(BoardSize::Nineteen),
            other => Err(BoardError::InvalidSize(other)),
        }
    }
}

impl From<BoardSize> for u32 {
    fn from(size: BoardSize) -> u32 {
        size.get() as u32
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.get(), self.get())
    }
}

/// Intersection contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Numeric code used by saved matches (0 empty, 1 black, 2 white)
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Stone::Empty => 0,
            Stone::Black => 1,
            Stone::White => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Stone> {
        match code {
            0 => Some(Stone::Empty),
            1 => Some(Stone::Black),
            2 => Some(Stone::White),
            _ => None,
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stone::Empty => "empty",
            Stone::Black => "black",
            Stone::White => "white",
        };
        f.write_str(name)
    }
}

/// Intersection on the board. Origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub col: u8,
    pub row: u8,
}

impl Pos {
    #[inline]
    pub fn new(col: u8, row: u8) -> Self {
        debug_assert!((col as usize) < MAX_BOARD_SIZE && (row as usize) < MAX_BOARD_SIZE);
        Self { col, row }
    }

    /// Row-major cell index on a board of the given size
    #[inline]
    pub fn to_index(self, size: BoardSize) -> usize {
        self.row as usize * size.get() + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: BoardSize) -> Self {
        Self {
            col: (idx % size.get()) as u8,
            row: (idx / size.get()) as u8,
        }
    }

    #[inline]
    pub fn is_on(self, size: BoardSize) -> bool {
        (self.col as usize) < size.get() && (self.row as usize) < size.get()
    }

    /// Step by `(dc, dr)` `times` times, `None` once off the board
    #[inline]
    pub fn offset(self, dc: i32, dr: i32, times: i32, size: BoardSize) -> Option<Pos> {
        let col = self.col as i32 + dc * times;
        let row = self.row as i32 + dr * times;
        size.contains(col, row).then(|| Pos::new(col as u8, row as u8))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
