//! Error types for the rule engine and its collaborators

use std::path::PathBuf;

use crate::board::Pos;
use crate::game::MatchStatus;

/// Invalid board configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("unsupported board size {0} (expected 15, 17 or 19)")]
    InvalidSize(u32),

    #[error("only black or white stones can be placed")]
    InvalidStone,
}

/// Malformed or out-of-range coordinate text such as `"Z99"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordError {
    #[error("empty coordinate")]
    Empty,

    #[error("coordinate '{0}' is too long")]
    TooLong(String),

    #[error("invalid column '{0}'")]
    BadColumn(char),

    #[error("invalid rank in '{0}'")]
    BadRank(String),

    #[error("coordinate '{0}' is off the board")]
    OutOfRange(String),
}

/// A move the match refused. The match is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("intersection {0} is already occupied")]
    Occupied(Pos),

    #[error("intersection {0} is off the board")]
    OffBoard(Pos),

    #[error("match is not being played (status: {0})")]
    NotPlaying(MatchStatus),

    #[error(transparent)]
    Coordinate(#[from] CoordError),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Resuming a match that is not suspended.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResumeError {
    #[error("only a stopped match can be resumed (status: {0})")]
    NotStopped(MatchStatus),
}

/// Corrupt or unreadable saved match.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("missing 'GA' header")]
    BadMagic,

    #[error("missing {0} field")]
    MissingField(&'static str),

    #[error("invalid {field} value '{value}'")]
    BadField { field: &'static str, value: String },

    #[error("move {index} is malformed: {source}")]
    BadMove { index: usize, source: CoordError },

    #[error("move {index} cannot be replayed: {source}")]
    IllegalMove { index: usize, source: MoveError },

    #[error("stored result {stored} does not match replayed result {replayed}")]
    Mismatch {
        stored: MatchStatus,
        replayed: MatchStatus,
    },

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
