//! Rule engine: applies a single move and rules on its outcome
//!
//! The engine places the stone, then scans the four lines through it and
//! derives a [`Verdict`] according to the active [`Ruleset`]:
//!
//! 1. **Freestyle, or Renju with White to move**: any run of five or more wins.
//!    Otherwise a full board is a draw.
//! 2. **Renju with Black to move**: the win check still runs first. A winning
//!    run is voided if the move also makes an overline (six or more). Without
//!    a win, more than one open four is a forbidden double-four.
//!
//! Win detection always precedes forbidden-move detection, and a Black win is
//! only ever overridden by an overline, never by a double-four.
//!
//! # Example
//!
//! ```
//! use gomoku::{Board, BoardSize, Pos, RuleEngine, Ruleset, Stone, Verdict};
//!
//! let engine = RuleEngine::new(Ruleset::Freestyle);
//! let mut board = Board::new(BoardSize::Fifteen);
//! for col in 0..4 {
//!     engine.apply(&mut board, Pos::new(col, 7), Stone::Black).unwrap();
//! }
//! let verdict = engine.apply(&mut board, Pos::new(4, 7), Stone::Black).unwrap();
//! assert_eq!(verdict.winner(), Stone::Black);
//! ```

use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::error::MoveError;
use crate::rules::{find_five_line, is_double_four, is_overline, Forbidden, Ruleset};

/// Outcome of one accepted move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Game goes on, turn passes to the opponent
    Continue,
    /// The mover connected five; `line` holds the whole winning run
    Win { winner: Stone, line: Vec<Pos> },
    /// Board filled without a winner
    Draw,
    /// Renju only: Black played a banned pattern, White wins
    Forbidden(Forbidden),
}

impl Verdict {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Verdict::Continue)
    }

    /// Winning color, `Stone::Empty` for a draw or an ongoing game
    pub fn winner(&self) -> Stone {
        match self {
            Verdict::Win { winner, .. } => *winner,
            Verdict::Forbidden(_) => Stone::White,
            Verdict::Continue | Verdict::Draw => Stone::Empty,
        }
    }
}

/// Stateless move applicator for one ruleset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleEngine {
    ruleset: Ruleset,
}

impl RuleEngine {
    #[must_use]
    pub fn new(ruleset: Ruleset) -> Self {
        Self { ruleset }
    }

    #[inline]
    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    /// Place `stone` at `pos` and rule on the result.
    ///
    /// Rejected moves (off the board, occupied cell) leave the board untouched.
    /// Accepted moves always stay on the board, forbidden ones included.
    pub fn apply(&self, board: &mut Board, pos: Pos, stone: Stone) -> Result<Verdict, MoveError> {
        if !pos.is_on(board.size()) {
            return Err(MoveError::OffBoard(pos));
        }
        if !board.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }
        board.set(pos, stone)?;

        let verdict = self.judge(board, pos, stone);
        debug!(?pos, %stone, ?verdict, "move applied");
        Ok(verdict)
    }

    /// Rule on a stone that is already on the board
    fn judge(&self, board: &Board, pos: Pos, stone: Stone) -> Verdict {
        let restricted = self.ruleset.restricts(stone);

        if let Some(line) = find_five_line(board, pos, stone) {
            if restricted && is_overline(board, pos, stone) {
                return Verdict::Forbidden(Forbidden::Overline);
            }
            return Verdict::Win { winner: stone, line };
        }

        if restricted && is_double_four(board, pos, stone) {
            return Verdict::Forbidden(Forbidden::DoubleFour);
        }

        if board.is_full() {
            Verdict::Draw
        } else {
            Verdict::Continue
        }
    }
}
