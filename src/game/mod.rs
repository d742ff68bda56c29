//! Game-level bookkeeping on top of the pure rules: turn order, capture
//! and burn tallies, and the turn-boundary wildfire.

pub mod state;

pub use state::{GameState, TurnReport, WildfireReport};
