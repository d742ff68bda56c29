//! Engine error taxonomy.
//!
//! Every error is local to the failing call; nothing is retried internally.
//! Probing past the board edge is not an error: `Board::contents` returns
//! `None` and the move search prunes on it.

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Board or simulator parameters cannot produce a valid layout.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A player number outside {1, 2}.
    #[error("invalid player {0}: must be 1 or 2")]
    InvalidPlayer(u8),

    /// A move that does not describe a piece moving on this board.
    #[error("invalid move definition: {0}")]
    InvalidMoveDefinition(String),

    /// Text that cannot be read as a board.
    #[error("cannot parse board at line {line}: {reason}")]
    ParseBoard { line: usize, reason: String },
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
