//! One generation of fire spread.
//!
//! Fire follows Conway's rules on the 8-neighbourhood, without wrapping:
//! 1. A burning square with two or three burning neighbours keeps burning.
//! 2. A square that is not burning with exactly three burning neighbours
//!    ignites. A piece standing on it burns up.
//! 3. Every other burning square goes out. A piece caught on it burns up.
//!
//! All squares are judged against the previous generation.

use super::FireOutcome;
use crate::core::{Board, Coord, Player, PlayerMap, Square};

/// Number of the eight squares around `coord` that are on fire.
fn burning_neighbors(board: &Board, coord: Coord) -> usize {
    coord
        .neighbors()
        .filter_map(|n| board.get(n))
        .filter(|sq| sq.is_on_fire())
        .count()
}

/// Advance the fire by one generation.
///
/// A board without fire comes back unchanged with zero burn counts.
#[must_use]
pub fn propagate_fire(board: &Board) -> FireOutcome {
    let mut burned = PlayerMap::<u32>::default();

    if !board.has_fire() {
        return FireOutcome {
            board: board.clone(),
            burned,
        };
    }

    let mut updates = Vec::new();
    for (coord, square) in board.iter() {
        let count = burning_neighbors(board, coord);

        if !square.is_on_fire() && count == 3 {
            if let Some(owner) = square.owner() {
                burned[owner] += 1;
            }
            updates.push((coord, Square::fire()));
        } else if square.is_on_fire() && !(2..=3).contains(&count) {
            if let Some(owner) = square.owner() {
                burned[owner] += 1;
            }
            updates.push((coord, Square::empty()));
        }
    }

    let mut next = board.clone();
    for (coord, square) in updates {
        next.put(coord, square);
    }

    tracing::debug!(
        player1_burned = burned[Player::One],
        player2_burned = burned[Player::Two],
        "fire propagated"
    );

    FireOutcome { board: next, burned }
}
