//! Coordinate notation: column letter plus rank counted from the bottom
//!
//! On a 15x15 board the top-left intersection is `A15` and the bottom-right
//! one is `O1`.

use super::{BoardSize, Pos};
use crate::error::CoordError;

/// Longest token: one letter and a two-digit rank
const MAX_LEN: usize = 3;

/// Format an on-board position, e.g. `(7, 7)` on 15x15 is `"H8"`
pub fn format(pos: Pos, size: BoardSize) -> String {
    debug_assert!(pos.is_on(size));
    let letter = (b'A' + pos.col) as char;
    let rank = size.get() - pos.row as usize;
    format!("{letter}{rank}")
}

/// Parse a token such as `"H8"` or `"A15"` for a board of the given size
pub fn parse(text: &str, size: BoardSize) -> Result<Pos, CoordError> {
    let text = text.trim();
    let mut chars = text.chars();
    let letter = chars.next().ok_or(CoordError::Empty)?;
    if text.len() > MAX_LEN {
        return Err(CoordError::TooLong(text.to_string()));
    }
    if !letter.is_ascii_uppercase() {
        return Err(CoordError::BadColumn(letter));
    }

    let digits = chars.as_str();
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoordError::BadRank(text.to_string()));
    }
    let rank: usize = digits
        .parse()
        .map_err(|_| CoordError::BadRank(text.to_string()))?;

    let col = (letter as u8 - b'A') as usize;
    if col >= size.get() || rank > size.get() {
        return Err(CoordError::OutOfRange(text.to_string()));
    }

    Ok(Pos::new(col as u8, (size.get() - rank) as u8))
}
