//! Win condition checking
//!
//! A win is five or more contiguous stones of one color in any of the four
//! orientations. Whether a long run (six or more) counts is decided by the
//! ruleset in [`crate::engine`].

use crate::board::{Board, Pos, Stone};

use super::line::{scan_line, Direction};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Fast five-in-a-row check at a specific position.
///
/// Only the four lines through `pos` are scanned.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    Direction::ALL
        .iter()
        .any(|&dir| longest_through(board, pos, color, dir) >= WIN_LENGTH)
}

/// Length of the run of `color` through `pos` in one orientation (0 if `pos` is not `color`)
pub fn longest_through(board: &Board, pos: Pos, color: Stone, dir: Direction) -> usize {
    scan_line(board, pos, color, dir)
        .run_through_anchor()
        .map_or(0, |run| run.len)
}

/// Find the winning run through `pos`, if any
///
/// Returns every position of the run (five or more), ordered along the line.
pub fn find_five_line(board: &Board, pos: Pos, color: Stone) -> Option<Vec<Pos>> {
    Direction::ALL.iter().find_map(|&dir| {
        let scan = scan_line(board, pos, color, dir);
        let run = *scan.run_through_anchor()?;
        (run.len >= WIN_LENGTH).then(|| scan.positions(&run))
    })
}
