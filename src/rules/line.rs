//! Line scanning shared by win, double-four and overline detection
//!
//! A scan walks the *whole* line through an anchor intersection, from one
//! board edge to the other, and records every maximal run of one color.
//! The four orientations only differ by their step vector.

use crate::board::{Board, BoardSize, Pos, Stone};

/// Line orientation through an intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Along a column
    Vertical,
    /// Along a row
    Horizontal,
    /// Top-left to bottom-right
    DiagonalDown,
    /// Bottom-left to top-right
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Vertical,
        Direction::Horizontal,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// Step vector as (dcol, drow)
    #[inline]
    pub const fn step(self) -> (i32, i32) {
        match self {
            Direction::Vertical => (0, 1),
            Direction::Horizontal => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (1, -1),
        }
    }
}

/// A maximal run of contiguous stones on a scanned line.
///
/// `start` is the index along the line (0 = the cell at the starting edge).
/// An end is open only when the neighbouring cell is on the board and empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub start: usize,
    pub len: usize,
    pub open_before: bool,
    pub open_after: bool,
}

impl Run {
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.start + self.len
    }

    /// Exactly four stones with both ends open
    #[inline]
    pub fn is_open_four(&self) -> bool {
        self.len == 4 && self.open_before && self.open_after
    }
}

/// Result of scanning one full line for one color
#[derive(Debug, Clone)]
pub struct LineScan {
    direction: Direction,
    size: BoardSize,
    /// Cell at the starting edge of the line
    origin: Pos,
    /// Index of the anchor along the line
    anchor: usize,
    runs: Vec<Run>,
}

impl LineScan {
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Length of the longest run anywhere on the line
    pub fn longest(&self) -> usize {
        self.runs.iter().map(|r| r.len).max().unwrap_or(0)
    }

    /// The run containing the anchor, if the anchor holds the scanned color
    pub fn run_through_anchor(&self) -> Option<&Run> {
        self.runs.iter().find(|r| r.contains(self.anchor))
    }

    /// Number of open fours anywhere on the line
    pub fn open_fours(&self) -> usize {
        self.runs.iter().filter(|r| r.is_open_four()).count()
    }

    /// Board positions covered by a run of this scan
    pub fn positions(&self, run: &Run) -> Vec<Pos> {
        let (dc, dr) = self.direction.step();
        (run.start..run.start + run.len)
            .filter_map(|i| self.origin.offset(dc, dr, i as i32, self.size))
            .collect()
    }
}

/// Scan the full line through `anchor` in `direction`, collecting runs of `stone`.
///
/// Steps backward from the anchor to the board edge, then walks forward to
/// the far edge. Every read is bounds-checked through [`Pos::offset`].
pub fn scan_line(board: &Board, anchor: Pos, stone: Stone, direction: Direction) -> LineScan {
    let size = board.size();
    let (dc, dr) = direction.step();

    let mut origin = anchor;
    let mut anchor_index = 0;
    while let Some(prev) = origin.offset(-dc, -dr, 1, size) {
        origin = prev;
        anchor_index += 1;
    }

    let mut runs = Vec::new();
    let mut count = 0usize;
    let mut open_before = false;
    let mut prev_empty = false;
    let mut index = 0usize;

    while let Some(pos) = origin.offset(dc, dr, index as i32, size) {
        let cell = board.get(pos);
        if cell == stone {
            if count == 0 {
                open_before = prev_empty;
            }
            count += 1;
        } else if count > 0 {
            runs.push(Run {
                start: index - count,
                len: count,
                open_before,
                open_after: cell == Stone::Empty,
            });
            count = 0;
        }
        prev_empty = cell == Stone::Empty;
        index += 1;
    }

    // A run touching the far edge is closed on that side
    if count > 0 {
        runs.push(Run {
            start: index - count,
            len: count,
            open_before,
            open_after: false,
        });
    }

    LineScan {
        direction,
        size,
        origin,
        anchor: anchor_index,
        runs,
    }
}
