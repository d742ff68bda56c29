//! West Coast expansion: wildfire.
//!
//! Fire behaves like Conway's Game of Life on the board squares and burns
//! any piece it spreads into. Two pure functions drive it:
//!
//! - [`propagate_fire`]: one generation of spread and burn-out
//! - [`start_fire`]: a random new fire around a random origin
//!
//! Both return a new board plus how many pieces of each player burned. The
//! caller owns the running totals.

pub mod ignite;
pub mod propagate;

use serde::{Deserialize, Serialize};

use crate::core::{Board, PlayerMap};

pub use ignite::{start_fire, start_fire_with};
pub use propagate::propagate_fire;

/// Result of one fire generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireOutcome {
    pub board: Board,
    /// Pieces destroyed this generation.
    pub burned: PlayerMap<u32>,
}

impl FireOutcome {
    /// Pieces destroyed across both players.
    #[must_use]
    pub fn total_burned(&self) -> u32 {
        self.burned.iter().map(|(_, n)| n).sum()
    }
}

/// Result of lighting a new fire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnitionOutcome {
    pub board: Board,
    /// Pieces destroyed by the new fire.
    pub burned: PlayerMap<u32>,
    /// Squares that went from not burning to burning.
    pub fires_started: u32,
}

impl IgnitionOutcome {
    /// Pieces destroyed across both players.
    #[must_use]
    pub fn total_burned(&self) -> u32 {
        self.burned.iter().map(|(_, n)| n).sum()
    }
}
