//! Core engine types: squares, coordinates, players, boards, RNG,
//! configuration and errors.

pub mod board;
pub mod config;
pub mod coord;
pub mod error;
pub mod player;
pub mod rng;
pub mod square;

pub use board::{generate_standard_board, Board};
pub use config::{BoardConfig, GameConfig, RulesConfig, WildfireConfig};
pub use coord::Coord;
pub use error::{EngineError, Result};
pub use player::{Player, PlayerMap};
pub use rng::GameRng;
pub use square::Square;
