//! # wildfire-checkers
//!
//! Rules engine for a forward-only checkers variant, with an optional
//! "West Coast expansion" in which fire spreads across the board like
//! Conway's Game of Life and burns the pieces it reaches.
//!
//! ## Design Principles
//!
//! 1. **Pure functions over immutable boards**: every operation returns a new
//!    `Board`. Rows are persistent `im` vectors, so unchanged rows are shared
//!    between versions.
//!
//! 2. **Sentinels at the edge**: reading off the board yields `None`, which
//!    the move search uses to stop without explicit bounds checks.
//!
//! 3. **Injected randomness**: fire ignition draws from a seeded `GameRng`,
//!    so any game can be replayed exactly.
//!
//! ## Modules
//!
//! - `core`: squares, coordinates, players, boards, RNG, configuration, errors
//! - `rules`: move definitions, legal move generation, move application
//! - `wildfire`: fire propagation and ignition
//! - `game`: turn order and running tallies

pub mod core;
pub mod game;
pub mod rules;
pub mod wildfire;

// Re-export commonly used types
pub use crate::core::{
    generate_standard_board, Board, BoardConfig, Coord, EngineError, GameConfig, GameRng, Player,
    PlayerMap, Result, RulesConfig, Square, WildfireConfig,
};

pub use crate::rules::{
    apply_move, legal_moves, legal_moves_for, legal_moves_for_player, legal_moves_with_rules,
    movable_origins, MoveDefinition, MoveIndex,
};

pub use crate::wildfire::{
    propagate_fire, start_fire, start_fire_with, FireOutcome, IgnitionOutcome,
};

pub use crate::game::{GameState, TurnReport, WildfireReport};
