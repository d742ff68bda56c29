//! Board coordinates.
//!
//! Coordinates are signed so that search code can step past an edge and let
//! the board report `None`, instead of guarding every step.

use serde::{Deserialize, Serialize};

/// A (row, col) position. May lie outside any particular board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// This coordinate translated by (dr, dc).
    #[must_use]
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// The eight surrounding coordinates, unclipped.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        (-1..=1)
            .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .map(move |(dr, dc)| self.offset(dr, dc))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(Coord::new(1, 1).offset(2, -2), Coord::new(3, -1));
    }

    #[test]
    fn test_neighbors() {
        let around: Vec<_> = Coord::new(0, 0).neighbors().collect();
        assert_eq!(around.len(), 8);
        assert!(!around.contains(&Coord::new(0, 0)));
        assert!(around.contains(&Coord::new(-1, -1)));
        assert!(around.contains(&Coord::new(1, 0)));
    }

    #[test]
    fn test_from_tuple() {
        assert_eq!(Coord::from((4, 2)), Coord::new(4, 2));
        assert_eq!(Coord::new(4, 2).to_string(), "(4, 2)");
    }
}
