//! Renju forbidden moves for Black
//!
//! Two patterns are banned:
//! - Double-four: one move creating more than one open four
//!   (four contiguous stones, both neighbouring cells empty and on the board)
//! - Overline: six or more contiguous stones
//!
//! Unlike a pre-move legality check, these functions inspect the board
//! *after* the stone at `pos` has been placed.

use std::fmt;

use crate::board::{Board, Pos, Stone};

use super::line::{scan_line, Direction};
use super::win::{longest_through, WIN_LENGTH};

/// Number of open fours a single move may create
const ALLOWED_OPEN_FOURS: usize = 1;

/// Why a move was ruled forbidden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Forbidden {
    DoubleFour,
    Overline,
}

impl fmt::Display for Forbidden {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Forbidden::DoubleFour => f.write_str("double four"),
            Forbidden::Overline => f.write_str("overline"),
        }
    }
}

/// Count the orientations in which the run through `pos` is an open four
pub fn count_open_fours(board: &Board, pos: Pos, stone: Stone) -> usize {
    Direction::ALL
        .iter()
        .filter(|&&dir| {
            scan_line(board, pos, stone, dir)
                .run_through_anchor()
                .is_some_and(|run| run.is_open_four())
        })
        .count()
}

/// More than one open four created by the stone at `pos`
pub fn is_double_four(board: &Board, pos: Pos, stone: Stone) -> bool {
    count_open_fours(board, pos, stone) > ALLOWED_OPEN_FOURS
}

/// Six or more contiguous stones through `pos` in any orientation
pub fn is_overline(board: &Board, pos: Pos, stone: Stone) -> bool {
    Direction::ALL
        .iter()
        .any(|&dir| longest_through(board, pos, stone, dir) > WIN_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSize;

    fn board_with(black: &[(u8, u8)], white: &[(u8, u8)]) -> Board {
        let mut board = Board::new(BoardSize::Fifteen);
        for &(c, r) in black {
            board.set(Pos::new(c, r), Stone::Black).unwrap();
        }
        for &(c, r) in white {
            board.set(Pos::new(c, r), Stone::White).unwrap();
        }
        board
    }

    #[test]
    fn test_single_open_four() {
        //  . B B B B .  on row 7, cols 3..=6
        let board = board_with(&[(3, 7), (4, 7), (5, 7), (6, 7)], &[]);
        assert_eq!(count_open_fours(&board, Pos::new(6, 7), Stone::Black), 1);
        assert!(!is_double_four(&board, Pos::new(6, 7), Stone::Black));
    }

    #[test]
    fn test_double_four_cross_pattern() {
        //     col: 4 5 6 7
        // row 4:         B
        // row 5:         B
        // row 6:         B
        // row 7:   B B B X
        let board = board_with(
            &[(4, 7), (5, 7), (6, 7), (7, 4), (7, 5), (7, 6), (7, 7)],
            &[],
        );
        assert_eq!(count_open_fours(&board, Pos::new(7, 7), Stone::Black), 2);
        assert!(is_double_four(&board, Pos::new(7, 7), Stone::Black));
    }

    #[test]
    fn test_blocked_four_not_open() {
        // W B B B B .
        let board = board_with(&[(3, 7), (4, 7), (5, 7), (6, 7)], &[(2, 7)]);
        assert_eq!(count_open_fours(&board, Pos::new(6, 7), Stone::Black), 0);
    }

    #[test]
    fn test_four_at_edge_not_open() {
        // Four starting on the left edge: the off-board side counts as closed
        let board = board_with(&[(0, 7), (1, 7), (2, 7), (3, 7), (3, 4), (3, 5), (3, 6)], &[]);
        assert_eq!(count_open_fours(&board, Pos::new(3, 7), Stone::Black), 1);
        assert!(!is_double_four(&board, Pos::new(3, 7), Stone::Black));
    }

    #[test]
    fn test_diagonal_double_four() {
        // Two diagonals crossing at (7, 7)
        let board = board_with(
            &[(4, 4), (5, 5), (6, 6), (7, 7), (8, 6), (9, 5), (10, 4)],
            &[],
        );
        assert_eq!(count_open_fours(&board, Pos::new(7, 7), Stone::Black), 2);
    }

    #[test]
    fn test_open_four_elsewhere_on_line_ignored() {
        // An open four on the same row that does not include the move
        let board = board_with(&[(0, 7), (2, 7), (3, 7), (4, 7), (5, 7)], &[]);
        assert_eq!(count_open_fours(&board, Pos::new(0, 7), Stone::Black), 0);
    }

    #[test]
    fn test_overline() {
        let board = board_with(&[(2, 3), (3, 3), (4, 3), (5, 3), (6, 3), (7, 3)], &[]);
        assert!(is_overline(&board, Pos::new(4, 3), Stone::Black));
    }

    #[test]
    fn test_exact_five_not_overline() {
        let board = board_with(&[(2, 3), (3, 3), (4, 3), (5, 3), (6, 3)], &[(7, 3)]);
        assert!(!is_overline(&board, Pos::new(6, 3), Stone::Black));
    }

    #[test]
    fn test_forbidden_display() {
        assert_eq!(Forbidden::DoubleFour.to_string(), "double four");
        assert_eq!(Forbidden::Overline.to_string(), "overline");
    }
}
