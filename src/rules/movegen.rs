//! Legal move generation.
//!
//! Pieces move and jump diagonally forward only. Jump chains are found with
//! a breadth-first work queue: each capture enqueues two jump-only steps from
//! its landing square, so every prefix of a chain is reported as its own
//! candidate and callers choose how far to go.

use std::collections::VecDeque;

use smallvec::SmallVec;

use super::moves::MoveDefinition;
use crate::core::{Board, Coord, Player, Result, RulesConfig, Square};

/// Column offsets of the two forward diagonals.
const DIAGONALS: [i32; 2] = [-1, 1];

/// One pending probe in the jump search.
struct Step {
    from: Coord,
    dc: i32,
    captures: SmallVec<[Coord; 4]>,
    jumps_only: bool,
}

/// Whether a piece may come to rest on `square`.
fn is_landing(square: Option<Square>, rules: &RulesConfig) -> bool {
    match square {
        Some(sq) if rules.fire_blocks_landing => sq.is_empty(),
        Some(sq) => !sq.is_occupied(),
        None => false,
    }
}

/// All legal moves for the piece at `origin`, under the default rules.
///
/// Returns an empty list if `origin` is off the board or holds no piece.
///
/// ```
/// use wildfire_checkers::core::{Board, Coord};
/// use wildfire_checkers::rules::legal_moves;
///
/// let board: Board = "...\n.x.\n...".parse().unwrap();
/// let moves = legal_moves(&board, Coord::new(1, 1));
/// assert_eq!(moves.len(), 2);
/// ```
#[must_use]
pub fn legal_moves(board: &Board, origin: Coord) -> Vec<MoveDefinition> {
    legal_moves_with_rules(board, origin, &RulesConfig::default())
}

/// All legal moves for the piece at `origin`.
#[must_use]
pub fn legal_moves_with_rules(
    board: &Board,
    origin: Coord,
    rules: &RulesConfig,
) -> Vec<MoveDefinition> {
    let Some(player) = board.get(origin).and_then(Square::owner) else {
        return Vec::new();
    };
    let dr = player.forward();
    let opponent = player.opponent();

    let mut queue: VecDeque<Step> = DIAGONALS
        .iter()
        .map(|&dc| Step {
            from: origin,
            dc,
            captures: SmallVec::new(),
            jumps_only: false,
        })
        .collect();
    let mut moves = Vec::new();

    while let Some(step) = queue.pop_front() {
        let Some(target) = board.contents(step.from, dr, step.dc) else {
            continue;
        };

        if !step.jumps_only && is_landing(Some(target), rules) {
            moves.push(MoveDefinition {
                from: origin,
                to: step.from.offset(dr, step.dc),
                captures: step.captures,
            });
            continue;
        }

        if !target.owned_by(opponent) {
            continue;
        }

        let landing = step.from.offset(2 * dr, 2 * step.dc);
        if !is_landing(board.get(landing), rules) {
            continue;
        }

        let mut captures = step.captures;
        captures.push(step.from.offset(dr, step.dc));

        for &dc in &DIAGONALS {
            queue.push_back(Step {
                from: landing,
                dc,
                captures: captures.clone(),
                jumps_only: true,
            });
        }
        moves.push(MoveDefinition {
            from: origin,
            to: landing,
            captures,
        });
    }

    tracing::trace!(%origin, %player, count = moves.len(), "generated legal moves");
    moves
}

/// All legal moves for every piece of player `player_num` (1 or 2).
///
/// Fails with `InvalidPlayer` for any other number.
pub fn legal_moves_for_player(board: &Board, player_num: u8) -> Result<Vec<MoveDefinition>> {
    let player = Player::from_number(player_num)?;
    Ok(legal_moves_for(board, player, &RulesConfig::default()))
}

/// All legal moves for every piece of `player`, in row-major origin order.
#[must_use]
pub fn legal_moves_for(board: &Board, player: Player, rules: &RulesConfig) -> Vec<MoveDefinition> {
    board
        .player_squares(player)
        .into_iter()
        .flat_map(|origin| legal_moves_with_rules(board, origin, rules))
        .collect()
}

/// Squares of `player` that have at least one legal move.
#[must_use]
pub fn movable_origins(board: &Board, player: Player, rules: &RulesConfig) -> Vec<Coord> {
    board
        .player_squares(player)
        .into_iter()
        .filter(|&origin| !legal_moves_with_rules(board, origin, rules).is_empty())
        .collect()
}
