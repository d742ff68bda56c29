//! Random ignition of new fires.

use super::IgnitionOutcome;
use crate::core::config::validate_probability;
use crate::core::{Board, Coord, EngineError, GameRng, PlayerMap, Result, Square, WildfireConfig};

/// Start a fire around a uniformly random origin.
///
/// Every square within `spread` rows and columns of the origin (clipped to
/// the board) lights with probability `intensity`. A piece on a lighting
/// square resists with probability `checker_resistance`, in which case the
/// square does not light at all; otherwise the piece burns up.
///
/// All draws come from `rng`, so a given seed always lights the same fire.
/// Fails with `InvalidConfiguration` if a probability lies outside [0, 1]
/// or `spread` is zero.
pub fn start_fire(
    board: &Board,
    intensity: f64,
    checker_resistance: f64,
    spread: u32,
    rng: &mut GameRng,
) -> Result<IgnitionOutcome> {
    validate_probability("intensity", intensity)?;
    validate_probability("checker_resistance", checker_resistance)?;
    if spread == 0 {
        return Err(EngineError::InvalidConfiguration(
            "spread must be a positive integer".to_string(),
        ));
    }

    let origin = Coord::new(rng.gen_index(board.rows()) as i32, rng.gen_index(board.cols()) as i32);
    let spread = i64::from(spread);
    let (row_lo, row_hi) = clip(origin.row, spread, board.rows());
    let (col_lo, col_hi) = clip(origin.col, spread, board.cols());

    let mut next = board.clone();
    let mut burned = PlayerMap::<u32>::default();
    let mut fires_started = 0;

    for row in row_lo..=row_hi {
        for col in col_lo..=col_hi {
            let coord = Coord::new(row, col);
            let Some(square) = board.get(coord) else {
                continue;
            };

            if !rng.gen_bool(intensity) {
                continue;
            }

            if let Some(owner) = square.owner() {
                if rng.gen_bool(checker_resistance) {
                    continue;
                }
                burned[owner] += 1;
            }

            if !square.is_on_fire() {
                fires_started += 1;
            }
            next.put(coord, Square::fire());
        }
    }

    tracing::debug!(%origin, spread, fires_started, "fire started");

    Ok(IgnitionOutcome {
        board: next,
        burned,
        fires_started,
    })
}

/// Inclusive range `center - spread ..= center + spread`, clipped to `0..len`.
fn clip(center: i32, spread: i64, len: usize) -> (i32, i32) {
    let center = i64::from(center);
    let last = len as i64 - 1;
    let lo = (center - spread).max(0);
    let hi = (center + spread).min(last);
    (lo as i32, hi as i32)
}

/// [`start_fire`] with parameters taken from `config`.
pub fn start_fire_with(
    board: &Board,
    config: &WildfireConfig,
    rng: &mut GameRng,
) -> Result<IgnitionOutcome> {
    start_fire(board, config.intensity, config.checker_resistance, config.spread, rng)
}
