//! Move definitions.
//!
//! A move is an origin, a destination, and the ordered list of opponent
//! squares jumped along the way. A simple slide has no captures; a jump chain
//! lists captures in the order they were taken.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Coord;

/// One legal move, as produced by the move generator.
///
/// ```
/// use wildfire_checkers::core::Coord;
/// use wildfire_checkers::rules::MoveDefinition;
///
/// let slide = MoveDefinition::slide(Coord::new(1, 1), Coord::new(2, 2));
/// assert!(!slide.is_capture());
///
/// let jump = MoveDefinition::jump(Coord::new(0, 0), Coord::new(2, 2), &[Coord::new(1, 1)]);
/// assert_eq!(jump.capture_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveDefinition {
    /// Square the piece starts on.
    pub from: Coord,

    /// Square the piece lands on.
    pub to: Coord,

    /// Jumped opponent squares, in order.
    /// SmallVec keeps chains of up to four jumps off the heap.
    pub captures: SmallVec<[Coord; 4]>,
}

impl MoveDefinition {
    /// A non-capturing move.
    #[must_use]
    pub fn slide(from: Coord, to: Coord) -> Self {
        Self {
            from,
            to,
            captures: SmallVec::new(),
        }
    }

    /// A move that captures `captures` in order.
    #[must_use]
    pub fn jump(from: Coord, to: Coord, captures: &[Coord]) -> Self {
        Self {
            from,
            to,
            captures: SmallVec::from_slice(captures),
        }
    }

    /// Whether this move takes any pieces.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }

    /// Number of pieces taken.
    #[must_use]
    pub fn capture_count(&self) -> usize {
        self.captures.len()
    }
}

impl std::fmt::Display for MoveDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)?;
        if self.is_capture() {
            write!(f, " x")?;
            for capture in &self.captures {
                write!(f, " {capture}")?;
            }
        }
        Ok(())
    }
}
