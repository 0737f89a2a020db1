//! Board structure: a fixed-size intersection grid

use std::fmt;

use super::bitboard::Bitboard;
use super::{BoardSize, Pos, Stone};
use crate::error::BoardError;

/// Game board. Dimensions are fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
}

impl Board {
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        debug_assert!(pos.is_on(self.size));
        let idx = pos.to_index(self.size);
        if self.black.get(idx) {
            Stone::Black
        } else if self.white.get(idx) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone. Only Black or White can be placed; the caller
    /// is responsible for the cell being empty and on the board.
    pub fn set(&mut self, pos: Pos, stone: Stone) -> Result<(), BoardError> {
        let idx = pos.to_index(self.size);
        match stone {
            Stone::Black => self.black.set(idx),
            Stone::White => self.white.set(idx),
            Stone::Empty => return Err(BoardError::InvalidStone),
        }
        Ok(())
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// True iff no empty intersection remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.size.cells()
    }

    /// Positions holding the given color (none for Empty)
    pub fn positions(&self, stone: Stone) -> impl Iterator<Item = Pos> + '_ {
        let bits = match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        };
        let size = self.size;
        bits.into_iter()
            .flat_map(|b| b.iter_ones())
            .map(move |idx| Pos::from_index(idx, size))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

/// Text rendering: ranks down the left, `+` for empty, `●` black, `○` white.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size.get();
        for row in 0..n {
            write!(f, "{:2} ", n - row)?;
            for col in 0..n {
                let symbol = match self.get(Pos::new(col as u8, row as u8)) {
                    Stone::Empty => '+',
                    Stone::Black => '\u{25CF}',
                    Stone::White => '\u{25CB}',
                };
                write!(f, "{symbol}")?;
                if col + 1 < n {
                    f.write_str("-")?;
                }
            }
            writeln!(f)?;
        }
        f.write_str("  ")?;
        for col in 0..n {
            write!(f, " {}", (b'A' + col as u8) as char)?;
        }
        writeln!(f)
    }
}
