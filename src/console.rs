//! Text front end: plays a match over any line reader and writer
//!
//! Moves are read as whitespace-separated coordinate tokens. Invalid or
//! occupied coordinates re-prompt the same player. End of input stops the
//! match so it can be saved and resumed later.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::board::{notation, Stone};
use crate::engine::Verdict;
use crate::error::MoveError;
use crate::game::{Match, MatchStatus, Move};

const INVALID_COORD: &str = "The coordinate you entered is invalid, please try again.";
const OCCUPIED: &str = "There is already a stone at the coordinate you entered, please try again.";
const STOPPED: &str = "The game is stopped.";

/// Whitespace tokenizer over a line reader
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, `None` at end of input
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

/// Play `game` until it ends or input runs out.
///
/// The board is printed before every prompt and once more when the match
/// is decided. Running out of input stops the match.
pub fn run<R: BufRead, W: Write>(game: &mut Match, input: R, out: &mut W) -> io::Result<()> {
    let mut tokens = Tokens::new(input);

    while game.status() == MatchStatus::Playing {
        write!(out, "{}", game.board())?;
        loop {
            write!(out, "{} stone's turn, please enter a move: ", turn_name(game.current_turn()))?;
            out.flush()?;

            let Some(token) = tokens.next_token()? else {
                game.stop();
                writeln!(out)?;
                writeln!(out, "{STOPPED}")?;
                return Ok(());
            };

            match game.place_notation(&token) {
                Ok(_) => break,
                Err(MoveError::Occupied(_)) => writeln!(out, "{OCCUPIED}")?,
                Err(err) => {
                    debug!(%token, %err, "move rejected");
                    writeln!(out, "{INVALID_COORD}")?;
                }
            }
        }
    }

    if game.status().is_terminal() {
        write!(out, "{}", game.board())?;
        if let Some(message) = outcome_message(game) {
            writeln!(out, "{message}")?;
        }
    }
    Ok(())
}

/// Closing line for a decided or stopped match, `None` while playing
pub fn outcome_message(game: &Match) -> Option<&'static str> {
    match game.status() {
        MatchStatus::Playing => None,
        MatchStatus::Stopped => Some(STOPPED),
        MatchStatus::Forbidden => Some("Game concluded, black made a forbidden move, white won."),
        MatchStatus::Finished => Some(match game.verdict() {
            Some(Verdict::Draw) => "Game concluded, the board is full, draw.",
            _ if game.winner() == Stone::White => "Game concluded, white won.",
            _ => "Game concluded, black won.",
        }),
    }
}

/// Print the move list two moves per line, Black first
pub fn write_moves<W: Write>(out: &mut W, game: &Match, moves: &[Move]) -> io::Result<()> {
    writeln!(out, "Moves:")?;
    for (i, mv) in moves.iter().enumerate() {
        if i % 2 == 0 {
            write!(out, "Black: ")?;
        } else {
            write!(out, "  White: ")?;
        }
        write!(out, "{:>3}", notation::format(mv.pos(), game.size()))?;
        if i % 2 == 1 || i + 1 == moves.len() {
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Print one replay frame: the board, the outcome after the last move,
/// then the moves so far
pub fn write_replay_frame<W: Write>(out: &mut W, game: &Match, finished: bool) -> io::Result<()> {
    write!(out, "{}", game.board())?;
    if finished {
        if let Some(message) = outcome_message(game) {
            writeln!(out, "{message}")?;
        }
    }
    write_moves(out, game, game.moves())
}

fn turn_name(stone: Stone) -> &'static str {
    match stone {
        Stone::White => "White",
        _ => "Black",
    }
}
