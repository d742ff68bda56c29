//! Move application.

use super::moves::MoveDefinition;
use crate::core::{Board, EngineError, Result, Square};

/// Apply `mv` to `board`, returning the resulting board.
///
/// `None` is a no-op: the returned board shares every row with the input.
/// Otherwise the origin is cleared, the moving piece lands on the
/// destination, and every captured square is cleared. Only rows that change
/// are copied; `board` itself is never modified.
///
/// The move is trusted to be legal. It is rejected with
/// `InvalidMoveDefinition` only when it cannot describe a piece moving on
/// this board: a coordinate off the board, or an origin without a piece.
pub fn apply_move(board: &Board, mv: Option<&MoveDefinition>) -> Result<Board> {
    let Some(mv) = mv else {
        return Ok(board.clone());
    };

    validate(board, mv)?;

    let mut next = board.clone();
    let piece = board.get(mv.from).unwrap_or_default();
    next.put(mv.from, Square::empty());
    next.put(mv.to, piece);
    for &capture in &mv.captures {
        next.put(capture, Square::empty());
    }

    tracing::debug!(%mv, "applied move");
    Ok(next)
}

fn validate(board: &Board, mv: &MoveDefinition) -> Result<()> {
    for (what, coord) in [("origin", mv.from), ("destination", mv.to)]
        .into_iter()
        .chain(mv.captures.iter().map(|&c| ("capture", c)))
    {
        if !board.contains(coord) {
            return Err(EngineError::InvalidMoveDefinition(format!(
                "{what} {coord} is off the {}x{} board",
                board.rows(),
                board.cols()
            )));
        }
    }

    match board.get(mv.from) {
        Some(square) if square.is_occupied() => Ok(()),
        _ => Err(EngineError::InvalidMoveDefinition(format!(
            "origin {} holds no piece",
            mv.from
        ))),
    }
}
