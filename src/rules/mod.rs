//! Game rules for Freestyle and Renju
//!
//! This module implements the rule set building blocks:
//! - Line scanning in four orientations
//! - Win conditions (5-in-a-row)
//! - Forbidden moves for Black in Renju (double-four, overline)

pub mod forbidden;
pub mod line;
pub mod win;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Stone;

// Re-exports for convenient access
pub use forbidden::{count_open_fours, is_double_four, is_overline, Forbidden};
pub use line::{scan_line, Direction, LineScan, Run};
pub use win::{find_five_line, has_five_at_pos, longest_through, WIN_LENGTH};

/// Rule set, fixed when a match is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ruleset {
    /// Gomoku: no move restrictions, long runs win
    #[default]
    Freestyle,
    /// Black is restricted by double-four and overline
    Renju,
}

impl Ruleset {
    /// Numeric code used by saved matches
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Ruleset::Freestyle => 0,
            Ruleset::Renju => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Ruleset> {
        match code {
            0 => Some(Ruleset::Freestyle),
            1 => Some(Ruleset::Renju),
            _ => None,
        }
    }

    /// Whether forbidden-move analysis applies to `stone`'s moves
    #[inline]
    pub fn restricts(self, stone: Stone) -> bool {
        self == Ruleset::Renju && stone == Stone::Black
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ruleset::Freestyle => f.write_str("freestyle"),
            Ruleset::Renju => f.write_str("renju"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ruleset_codes() {
        assert_eq!(Ruleset::from_code(Ruleset::Freestyle.code()), Some(Ruleset::Freestyle));
        assert_eq!(Ruleset::from_code(Ruleset::Renju.code()), Some(Ruleset::Renju));
        assert_eq!(Ruleset::from_code(2), None);
    }

    #[test]
    fn test_only_renju_black_is_restricted() {
        assert!(Ruleset::Renju.restricts(Stone::Black));
        assert!(!Ruleset::Renju.restricts(Stone::White));
        assert!(!Ruleset::Freestyle.restricts(Stone::Black));
    }
}
