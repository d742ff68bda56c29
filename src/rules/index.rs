//! Lookup tables over a set of candidate moves.
//!
//! Front ends that highlight moves need three questions answered quickly:
//! which origins can move, which move lands on a given square, and which
//! squares would be captured by any candidate.

use rustc_hash::{FxHashMap, FxHashSet};

use super::moves::MoveDefinition;
use crate::core::Coord;

/// Candidate moves indexed by origin, landing square and captured square.
#[derive(Clone, Debug, Default)]
pub struct MoveIndex {
    moves: Vec<MoveDefinition>,
    by_landing: FxHashMap<Coord, Vec<usize>>,
    origins: FxHashSet<Coord>,
    captured: FxHashSet<Coord>,
}

impl MoveIndex {
    /// Index a list of moves, keeping their order.
    #[must_use]
    pub fn new(moves: Vec<MoveDefinition>) -> Self {
        let mut by_landing: FxHashMap<Coord, Vec<usize>> = FxHashMap::default();
        let mut origins = FxHashSet::default();
        let mut captured = FxHashSet::default();

        for (i, mv) in moves.iter().enumerate() {
            by_landing.entry(mv.to).or_default().push(i);
            origins.insert(mv.from);
            captured.extend(mv.captures.iter().copied());
        }

        Self {
            moves,
            by_landing,
            origins,
            captured,
        }
    }

    /// All indexed moves, in their original order.
    #[must_use]
    pub fn moves(&self) -> &[MoveDefinition] {
        &self.moves
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves that end on `landing`.
    pub fn landing_on(&self, landing: Coord) -> impl Iterator<Item = &MoveDefinition> + '_ {
        self.by_landing
            .get(&landing)
            .into_iter()
            .flatten()
            .map(move |&i| &self.moves[i])
    }

    /// The move from `from` to `to`, preferring the longest capture chain if
    /// several share both ends.
    #[must_use]
    pub fn find(&self, from: Coord, to: Coord) -> Option<&MoveDefinition> {
        self.landing_on(to)
            .filter(|mv| mv.from == from)
            .max_by_key(|mv| mv.capture_count())
    }

    /// Whether some move starts at `origin`.
    #[must_use]
    pub fn is_origin(&self, origin: Coord) -> bool {
        self.origins.contains(&origin)
    }

    /// Whether some move captures the piece at `square`.
    #[must_use]
    pub fn is_captured(&self, square: Coord) -> bool {
        self.captured.contains(&square)
    }
}
