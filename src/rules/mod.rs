//! Checkers rules: move definitions, generation, indexing and application.
//!
//! Pieces are never promoted and never move backward.

pub mod execute;
pub mod index;
pub mod movegen;
pub mod moves;

pub use execute::apply_move;
pub use index::MoveIndex;
pub use movegen::{
    legal_moves, legal_moves_for, legal_moves_for_player, legal_moves_with_rules, movable_origins,
};
pub use moves::MoveDefinition;
