//! Five-in-a-row rule engine for Freestyle and Renju
//!
//! Two players alternately place Black and White stones on a 15x15, 17x17 or
//! 19x19 board. Black moves first.
//! - **Freestyle**: five or more stones in a line win, for either color
//! - **Renju**: Black may not make an overline (six or more) or a double-four.
//!   A forbidden move ends the match and White wins. White plays unrestricted.
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards, coordinate notation
//! - [`rules`]: Line scanning, win detection, Renju forbidden patterns
//! - [`engine`]: Applies one move and rules on its outcome
//! - [`game`]: Match lifecycle (play, stop, resume, replay)
//! - [`record`]: Saved match text format
//! - [`config`], [`cli`]: Application settings and command-line arguments
//! - [`console`]: Text front end over any reader and writer
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{BoardSize, Match, MatchStatus, Ruleset, Stone};
//!
//! let mut game = Match::new(BoardSize::Fifteen, Ruleset::Renju);
//! for mv in ["H8", "A1", "I8", "A2", "J8", "A3", "K8", "A4"] {
//!     game.place_notation(mv).unwrap();
//! }
//! game.place_notation("L8").unwrap();
//!
//! assert_eq!(game.status(), MatchStatus::Finished);
//! assert_eq!(game.winner(), Stone::Black);
//! ```

pub mod board;
pub mod cli;
pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod game;
pub mod record;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, BoardSize, Pos, Stone};
pub use config::AppConfig;
pub use engine::{RuleEngine, Verdict};
pub use error::{BoardError, ConfigError, CoordError, MoveError, RecordError, ResumeError};
pub use game::{Match, MatchStatus, Move, Replay};
pub use record::MatchRecord;
pub use rules::{Forbidden, Ruleset};
