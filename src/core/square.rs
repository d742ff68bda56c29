//! Square contents.
//!
//! A square carries two independent facts: which player (if any) occupies
//! it, and whether it is on fire. Both can hold at once while the fire
//! simulation is mid-transition; the occupant is cleared when the square
//! actually ignites.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Contents of one board square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    occupant: Option<Player>,
    on_fire: bool,
}

impl Square {
    /// No piece, no fire.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            occupant: None,
            on_fire: false,
        }
    }

    /// A piece belonging to `player`.
    #[must_use]
    pub const fn player(player: Player) -> Self {
        Self {
            occupant: Some(player),
            on_fire: false,
        }
    }

    /// Pure fire with no occupant.
    #[must_use]
    pub const fn fire() -> Self {
        Self {
            occupant: None,
            on_fire: true,
        }
    }

    /// A piece caught in fire that has not burned yet.
    #[must_use]
    pub const fn burning(player: Player) -> Self {
        Self {
            occupant: Some(player),
            on_fire: true,
        }
    }

    /// Neither a piece nor fire.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.occupant.is_none() && !self.on_fire
    }

    /// Holds a piece of either player.
    #[must_use]
    pub const fn is_occupied(self) -> bool {
        self.occupant.is_some()
    }

    #[must_use]
    pub fn owned_by_player1(self) -> bool {
        self.occupant == Some(Player::One)
    }

    #[must_use]
    pub fn owned_by_player2(self) -> bool {
        self.occupant == Some(Player::Two)
    }

    #[must_use]
    pub fn owned_by(self, player: Player) -> bool {
        self.occupant == Some(player)
    }

    /// The occupying player, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        self.occupant
    }

    #[must_use]
    pub const fn is_on_fire(self) -> bool {
        self.on_fire
    }

    /// Text symbol used by the board's `Display` and `FromStr`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match (self.occupant, self.on_fire) {
            (None, false) => '.',
            (None, true) => '*',
            (Some(Player::One), false) => 'x',
            (Some(Player::One), true) => 'X',
            (Some(Player::Two), false) => 'o',
            (Some(Player::Two), true) => 'O',
        }
    }

    /// Inverse of [`Square::symbol`].
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Self::empty()),
            '*' => Some(Self::fire()),
            'x' => Some(Self::player(Player::One)),
            'X' => Some(Self::burning(Player::One)),
            'o' => Some(Self::player(Player::Two)),
            'O' => Some(Self::burning(Player::Two)),
            _ => None,
        }
    }
}
