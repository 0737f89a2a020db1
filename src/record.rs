//! Saved match format
//!
//! ```text
//! GA
//! 15        board size: 15, 17 or 19
//! 1         ruleset: 0 freestyle, 1 renju
//! 3         status: 1 forbidden, 2 stopped, 3 finished
//! 1         winner: 0 none, 1 black, 2 white
//! H8        moves, one coordinate per line
//! J9
//! ```
//!
//! Decoding only validates the text. Rebuilding a playable match from a
//! record (replaying every move) is [`Match::from_record`](crate::Match::from_record).

use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use crate::board::{notation, BoardSize, Pos, Stone};
use crate::error::RecordError;
use crate::game::MatchStatus;
use crate::rules::Ruleset;

/// First token of every saved match
pub const MAGIC: &str = "GA";

/// Decoded contents of a saved match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub size: BoardSize,
    pub ruleset: Ruleset,
    pub status: MatchStatus,
    pub winner: Stone,
    pub moves: Vec<Pos>,
}

/// Render a record in the saved-match text format
pub fn encode(record: &MatchRecord) -> String {
    let mut out = format!(
        "{MAGIC}\n{}\n{}\n{}\n{}\n",
        record.size.get(),
        record.ruleset.code(),
        record.status.code(),
        record.winner.code(),
    );
    for &pos in &record.moves {
        out.push_str(&notation::format(pos, record.size));
        out.push('\n');
    }
    out
}

/// Parse saved-match text. Tokens are whitespace separated.
pub fn decode(text: &str) -> Result<MatchRecord, RecordError> {
    let mut tokens = text.split_whitespace();

    if tokens.next() != Some(MAGIC) {
        return Err(RecordError::BadMagic);
    }

    let size_value: u32 = number(tokens.next(), "size")?;
    let size = BoardSize::try_from(size_value).map_err(|_| RecordError::BadField {
        field: "size",
        value: size_value.to_string(),
    })?;

    let ruleset_code = number(tokens.next(), "ruleset")?;
    let ruleset = Ruleset::from_code(ruleset_code).ok_or_else(|| bad("ruleset", ruleset_code))?;

    let status_code = number(tokens.next(), "status")?;
    let status = MatchStatus::from_code(status_code)
        .filter(|s| *s != MatchStatus::Playing)
        .ok_or_else(|| bad("status", status_code))?;

    let winner_code = number(tokens.next(), "winner")?;
    let winner = Stone::from_code(winner_code).ok_or_else(|| bad("winner", winner_code))?;

    let moves = tokens
        .enumerate()
        .map(|(index, token)| {
            notation::parse(token, size).map_err(|source| RecordError::BadMove { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MatchRecord {
        size,
        ruleset,
        status,
        winner,
        moves,
    })
}

/// Read and decode a saved match
#[instrument]
pub fn load(path: &Path) -> Result<MatchRecord, RecordError> {
    let text = fs::read_to_string(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let record = decode(&text)?;
    debug!(moves = record.moves.len(), status = %record.status, "record loaded");
    Ok(record)
}

/// Encode and write a saved match
#[instrument(skip(record))]
pub fn save(path: &Path, record: &MatchRecord) -> Result<(), RecordError> {
    fs::write(path, encode(record)).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(moves = record.moves.len(), "record saved");
    Ok(())
}

fn number<T: std::str::FromStr>(token: Option<&str>, field: &'static str) -> Result<T, RecordError> {
    let token = token.ok_or(RecordError::MissingField(field))?;
    token.parse().map_err(|_| RecordError::BadField {
        field,
        value: token.to_string(),
    })
}

fn bad(field: &'static str, code: u8) -> RecordError {
    RecordError::BadField {
        field,
        value: code.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoordError;

    const SAMPLE: &str = "GA\n15\n1\n2\n0\nH8\nJ9\nA15\n";

    #[test]
    fn test_decode_sample() {
        let record = decode(SAMPLE).unwrap();
        assert_eq!(record.size, BoardSize::Fifteen);
        assert_eq!(record.ruleset, Ruleset::Renju);
        assert_eq!(record.status, MatchStatus::Stopped);
        assert_eq!(record.winner, Stone::Empty);
        assert_eq!(record.moves, vec![Pos::new(7, 7), Pos::new(9, 6), Pos::new(0, 0)]);
    }

    #[test]
    fn test_encode_matches_format() {
        let record = decode(SAMPLE).unwrap();
        assert_eq!(encode(&record), SAMPLE);
    }

    #[test]
    fn test_decode_without_moves_and_trailing_blank_lines() {
        let record = decode("GA\n19\n0\n3\n0\n\n\n").unwrap();
        assert_eq!(record.size, BoardSize::Nineteen);
        assert!(record.moves.is_empty());
    }

    #[test]
    fn test_decode_rejects_bad_magic() {
        assert!(matches!(decode("GB\n15\n0\n2\n0\n"), Err(RecordError::BadMagic)));
        assert!(matches!(decode(""), Err(RecordError::BadMagic)));
    }

    #[test]
    fn test_decode_rejects_bad_header_fields() {
        let cases = [
            ("GA\n16\n0\n2\n0\n", "size"),
            ("GA\nabc\n0\n2\n0\n", "size"),
            ("GA\n15\n2\n2\n0\n", "ruleset"),
            ("GA\n15\n0\n0\n0\n", "status"),
            ("GA\n15\n0\n4\n0\n", "status"),
            ("GA\n15\n0\n2\n3\n", "winner"),
            ("GA\n15\n0\n2\n-1\n", "winner"),
        ];
        for (text, expected) in cases {
            match decode(text) {
                Err(RecordError::BadField { field, .. }) => assert_eq!(field, expected, "{text:?}"),
                other => panic!("expected bad {expected} for {text:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_decode_rejects_truncated_header() {
        assert!(matches!(
            decode("GA\n15\n0\n"),
            Err(RecordError::MissingField("status"))
        ));
    }

    #[test]
    fn test_decode_rejects_bad_moves() {
        assert!(matches!(
            decode("GA\n15\n0\n2\n0\nH8\nP1\n"),
            Err(RecordError::BadMove { index: 1, source: CoordError::OutOfRange(_) })
        ));
        assert!(matches!(
            decode("GA\n15\n0\n2\n0\nh8\n"),
            Err(RecordError::BadMove { index: 0, source: CoordError::BadColumn('h') })
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("match.gmk");
        let record = decode(SAMPLE).unwrap();

        save(&path, &record).unwrap();
        assert_eq!(load(&path).unwrap(), record);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.gmk");
        assert!(matches!(load(&path), Err(RecordError::Io { .. })));
    }
}
