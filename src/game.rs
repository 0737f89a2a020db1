//! Match state machine: move history, status, turn order and replay
//!
//! ```text
//! Playing ──place──▶ Finished | Forbidden      (terminal)
//!    │  ▲
//!  stop resume
//!    ▼  │
//! Stopped
//! ```
//!
//! The side to move is never stored: it is derived from the number of moves
//! played (even count means Black to move).

use std::fmt;

use tracing::{debug, info, instrument, warn};

use crate::board::{notation, Board, BoardSize, Pos, Stone};
use crate::engine::{RuleEngine, Verdict};
use crate::error::{MoveError, RecordError, ResumeError};
use crate::record::MatchRecord;
use crate::rules::{Forbidden, Ruleset};

/// Lifecycle of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchStatus {
    /// Accepting moves
    #[default]
    Playing,
    /// Renju: Black played a forbidden move, White won
    Forbidden,
    /// Suspended without a result, can be resumed
    Stopped,
    /// Five in a row, or a full board
    Finished,
}

impl MatchStatus {
    /// Numeric code used by saved matches
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            MatchStatus::Playing => 0,
            MatchStatus::Forbidden => 1,
            MatchStatus::Stopped => 2,
            MatchStatus::Finished => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<MatchStatus> {
        match code {
            0 => Some(MatchStatus::Playing),
            1 => Some(MatchStatus::Forbidden),
            2 => Some(MatchStatus::Stopped),
            3 => Some(MatchStatus::Finished),
            _ => None,
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, MatchStatus::Finished | MatchStatus::Forbidden)
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchStatus::Playing => "playing",
            MatchStatus::Forbidden => "forbidden",
            MatchStatus::Stopped => "stopped",
            MatchStatus::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// A stone placed during the match. Only created by [`Match::place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pos: Pos,
    stone: Stone,
}

impl Move {
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub fn stone(&self) -> Stone {
        self.stone
    }
}

/// One game of Freestyle or Renju
#[derive(Debug, Clone)]
pub struct Match {
    board: Board,
    engine: RuleEngine,
    status: MatchStatus,
    winner: Stone,
    moves: Vec<Move>,
    /// Verdict of the last accepted move
    verdict: Option<Verdict>,
}

impl Match {
    /// Empty board, Black to move
    pub fn new(size: BoardSize, ruleset: Ruleset) -> Self {
        Self {
            board: Board::new(size),
            engine: RuleEngine::new(ruleset),
            status: MatchStatus::Playing,
            winner: Stone::Empty,
            moves: Vec::with_capacity(size.cells()),
            verdict: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    #[inline]
    pub fn ruleset(&self) -> Ruleset {
        self.engine.ruleset()
    }

    #[inline]
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    #[inline]
    pub fn winner(&self) -> Stone {
        self.winner
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// Side to move, from move-count parity
    #[inline]
    pub fn current_turn(&self) -> Stone {
        if self.moves.len() % 2 == 0 {
            Stone::Black
        } else {
            Stone::White
        }
    }

    /// Verdict of the last accepted move, if any move was played
    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    /// Stones of the winning run, when the match ended by connection
    pub fn winning_line(&self) -> Option<&[Pos]> {
        match &self.verdict {
            Some(Verdict::Win { line, .. }) => Some(line),
            _ => None,
        }
    }

    /// Reason for a forbidden ruling
    pub fn forbidden(&self) -> Option<Forbidden> {
        match self.verdict {
            Some(Verdict::Forbidden(rule)) => Some(rule),
            _ => None,
        }
    }

    /// Play the side to move at `pos`.
    ///
    /// A rejected move (match not playing, occupied or off-board cell)
    /// changes nothing and is not recorded.
    #[instrument(skip(self), fields(turn = %self.current_turn()))]
    pub fn place(&mut self, pos: Pos) -> Result<Verdict, MoveError> {
        if self.status != MatchStatus::Playing {
            debug!(status = %self.status, "move rejected");
            return Err(MoveError::NotPlaying(self.status));
        }

        let stone = self.current_turn();
        let verdict = self.engine.apply(&mut self.board, pos, stone)?;
        self.moves.push(Move { pos, stone });

        match &verdict {
            Verdict::Continue => {}
            Verdict::Win { winner, .. } => {
                self.status = MatchStatus::Finished;
                self.winner = *winner;
                info!(winner = %winner, moves = self.moves.len(), "match finished");
            }
            Verdict::Draw => {
                self.status = MatchStatus::Finished;
                self.winner = Stone::Empty;
                info!(moves = self.moves.len(), "board full, match drawn");
            }
            Verdict::Forbidden(rule) => {
                self.status = MatchStatus::Forbidden;
                self.winner = Stone::White;
                info!(%rule, moves = self.moves.len(), "forbidden move, white wins");
            }
        }

        self.verdict = Some(verdict.clone());
        Ok(verdict)
    }

    /// Parse a coordinate such as `"H8"` and play it
    pub fn place_notation(&mut self, text: &str) -> Result<Verdict, MoveError> {
        let pos = notation::parse(text, self.size())?;
        self.place(pos)
    }

    /// Suspend a match in progress. Other statuses are left alone.
    pub fn stop(&mut self) {
        if self.status == MatchStatus::Playing {
            self.status = MatchStatus::Stopped;
            info!(moves = self.moves.len(), "match stopped");
        }
    }

    /// Continue a stopped match. The side to move follows from the history.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn resume(&mut self) -> Result<(), ResumeError> {
        if self.status != MatchStatus::Stopped {
            warn!("resume refused");
            return Err(ResumeError::NotStopped(self.status));
        }
        self.status = MatchStatus::Playing;
        info!(turn = %self.current_turn(), "match resumed");
        Ok(())
    }

    /// Start replaying this match's moves on a fresh board
    pub fn replay(&self) -> Replay<'_> {
        Replay {
            source: self,
            game: Match::new(self.size(), self.ruleset()),
            next: 0,
        }
    }

    /// Replay every move and return the rebuilt match
    pub fn replayed(&self) -> Result<Match, MoveError> {
        let mut replay = self.replay();
        while let Some(step) = replay.step() {
            step?;
        }
        Ok(replay.into_match())
    }

    /// Snapshot for persistence. A match still in play is saved as stopped.
    pub fn to_record(&self) -> MatchRecord {
        let status = match self.status {
            MatchStatus::Playing => MatchStatus::Stopped,
            other => other,
        };
        MatchRecord {
            size: self.size(),
            ruleset: self.ruleset(),
            status,
            winner: self.winner,
            moves: self.moves.iter().map(Move::pos).collect(),
        }
    }

    /// Rebuild a match by replaying a saved move list through [`Match::place`].
    ///
    /// The replayed result must agree with the stored one. Only "stopped"
    /// cannot be derived from the moves, so a replay that ends in play takes
    /// the stored stopped status.
    pub fn from_record(record: &MatchRecord) -> Result<Match, RecordError> {
        let mut game = Match::new(record.size, record.ruleset);
        for (index, &pos) in record.moves.iter().enumerate() {
            game.place(pos)
                .map_err(|source| RecordError::IllegalMove { index, source })?;
        }

        if record.status == MatchStatus::Stopped {
            game.stop();
        }
        if game.status != record.status || game.winner != record.winner {
            return Err(RecordError::Mismatch {
                stored: record.status,
                replayed: game.status,
            });
        }

        debug!(moves = game.moves.len(), status = %game.status, "match restored");
        Ok(game)
    }
}

/// Step-by-step replay of a match, in original move order.
///
/// Rendering between steps is left to the caller.
#[derive(Debug)]
pub struct Replay<'a> {
    source: &'a Match,
    game: Match,
    next: usize,
}

impl Replay<'_> {
    /// Play the next recorded move; `None` once every move was replayed.
    ///
    /// After the last move a stopped source leaves the replay stopped too.
    pub fn step(&mut self) -> Option<Result<Verdict, MoveError>> {
        let mv = self.source.moves.get(self.next)?;
        self.next += 1;
        let result = self.game.place(mv.pos);
        if self.next == self.source.moves.len() && self.source.status == MatchStatus::Stopped {
            self.game.stop();
        }
        Some(result)
    }

    /// State after the moves replayed so far
    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Number of moves replayed so far
    pub fn position(&self) -> usize {
        self.next
    }

    pub fn is_done(&self) -> bool {
        self.next >= self.source.moves.len()
    }

    pub fn into_match(self) -> Match {
        self.game
    }
}
