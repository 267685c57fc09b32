//! Grid coordinate value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single `(row, column)` cell on the template grid.
///
/// Purely structural: two positions are equal iff row and column match.
/// Grid bounds are a [`Template`](crate::template::Template) concern and
/// are not enforced here. The `Ord` derive sorts row-major, which gives
/// `used_positions` a deterministic serialization order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Canonical `"row-col"` form, e.g. `"3-5"`.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// A string that is not a valid `"row-col"` position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid position '{input}', expected \"row-col\"")]
pub struct PositionParseError {
    pub input: String,
}

impl FromStr for Position {
    type Err = PositionParseError;

    /// Parse the canonical `"row-col"` form back into a position
    /// (round-trips with [`Display`](fmt::Display)).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || PositionParseError {
            input: s.to_string(),
        };
        let (row, col) = s.split_once('-').ok_or_else(err)?;
        let row = row.parse().map_err(|_| err())?;
        let col = col.parse().map_err(|_| err())?;
        Ok(Self { row, col })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Equality ---

    #[test]
    fn equal_when_row_and_col_match() {
        assert_eq!(Position::new(3, 5), Position::new(3, 5));
        assert_ne!(Position::new(3, 5), Position::new(5, 3));
        assert_ne!(Position::new(3, 5), Position::new(3, 6));
    }

    // --- String form ---

    #[test]
    fn display_is_row_dash_col() {
        assert_eq!(Position::new(1, 1).to_string(), "1-1");
        assert_eq!(Position::new(20, 6).to_string(), "20-6");
    }

    #[test]
    fn from_str_round_trips() {
        for p in [Position::new(1, 1), Position::new(20, 6), Position::new(7, 3)] {
            assert_eq!(p.to_string().parse::<Position>().unwrap(), p);
        }
    }

    #[test]
    fn from_str_rejects_malformed_input() {
        assert!("".parse::<Position>().is_err());
        assert!("3".parse::<Position>().is_err());
        assert!("a-b".parse::<Position>().is_err());
        assert!("3-".parse::<Position>().is_err());
        assert!("-5".parse::<Position>().is_err());
        assert!("3-5-7".parse::<Position>().is_err());
    }

    // --- Ordering ---

    #[test]
    fn sorts_row_major() {
        let mut cells = vec![
            Position::new(2, 1),
            Position::new(1, 6),
            Position::new(1, 2),
        ];
        cells.sort();
        assert_eq!(
            cells,
            vec![
                Position::new(1, 2),
                Position::new(1, 6),
                Position::new(2, 1),
            ]
        );
    }
}
