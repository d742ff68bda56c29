//! Player identification and per-player tallies.
//!
//! ## Player
//!
//! Exactly two sides. Player 1 starts on row 0 and advances toward
//! increasing row index; player 2 starts on the last row and advances toward
//! decreasing row index. Pieces never move backward.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`, used for capture and burn
//! counters.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::{EngineError, Result};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Look up a player by its public number (1 or 2).
    ///
    /// ```
    /// use wildfire_checkers::core::Player;
    ///
    /// assert_eq!(Player::from_number(2).unwrap(), Player::Two);
    /// assert!(Player::from_number(0).is_err());
    /// ```
    pub fn from_number(number: u8) -> Result<Self> {
        match number {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(EngineError::InvalidPlayer(other)),
        }
    }

    /// The public player number.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Row offset of a forward step.
    #[must_use]
    pub const fn forward(self) -> i32 {
        match self {
            Player::One => 1,
            Player::Two => -1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player data with O(1) access.
///
/// ```
/// use wildfire_checkers::core::{Player, PlayerMap};
///
/// let mut burned: PlayerMap<u32> = PlayerMap::default();
/// burned[Player::Two] += 3;
/// assert_eq!(burned[Player::One], 0);
/// assert_eq!(burned[Player::Two], 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
