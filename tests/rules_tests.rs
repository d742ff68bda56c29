//! Move generation and move application integration tests.
//!
//! Boards are written in the text form: `.` empty, `x` player 1,
//! `o` player 2, `*` fire. Player 1 moves down the page.

use wildfire_checkers::core::{Board, Coord, Player, Square};
use wildfire_checkers::rules::{apply_move, legal_moves, legal_moves_for_player, MoveDefinition};

fn board(text: &str) -> Board {
    text.parse().expect("fixture board")
}

fn c(row: i32, col: i32) -> Coord {
    Coord::new(row, col)
}

// =============================================================================
// Move Generation
// =============================================================================

/// Test that a lone piece has exactly its two forward slides.
#[test]
fn test_basic_moves_player_one() {
    let b = board(
        "
        ...
        .x.
        ...
        ",
    );

    assert_eq!(
        legal_moves(&b, c(1, 1)),
        vec![MoveDefinition::slide(c(1, 1), c(2, 0)), MoveDefinition::slide(c(1, 1), c(2, 2))]
    );
}

/// Test that a single opponent piece can be jumped.
#[test]
fn test_single_jump() {
    let b = board(
        "
        x..
        .o.
        ...
        ",
    );

    assert_eq!(legal_moves(&b, c(0, 0)), vec![MoveDefinition::jump(c(0, 0), c(2, 2), &[c(1, 1)])]);
}

/// Test that both diagonals jump, and a piece cannot jump straight ahead.
#[test]
fn test_single_jump_both_directions() {
    let b = board(
        "
        xxx
        .o.
        ...
        ",
    );

    assert_eq!(legal_moves(&b, c(0, 0)), vec![MoveDefinition::jump(c(0, 0), c(2, 2), &[c(1, 1)])]);
    assert_eq!(legal_moves(&b, c(0, 2)), vec![MoveDefinition::jump(c(0, 2), c(2, 0), &[c(1, 1)])]);
    assert_eq!(
        legal_moves(&b, c(0, 1)),
        vec![MoveDefinition::slide(c(0, 1), c(1, 0)), MoveDefinition::slide(c(0, 1), c(1, 2))]
    );
}

/// Test that player 2 jumps toward row 0.
#[test]
fn test_single_jump_player_two() {
    let b = board(
        "
        ...
        .x.
        o.o
        ...
        ",
    );

    assert_eq!(legal_moves(&b, c(2, 0)), vec![MoveDefinition::jump(c(2, 0), c(0, 2), &[c(1, 1)])]);
    assert_eq!(legal_moves(&b, c(2, 2)), vec![MoveDefinition::jump(c(2, 2), c(0, 0), &[c(1, 1)])]);
}

/// Test that moving next to an enemy is allowed even when it exposes the piece.
#[test]
fn test_move_into_a_trap() {
    let b = board(
        "
        x...
        ....
        ..o.
        ....
        ",
    );

    assert_eq!(legal_moves(&b, c(0, 0)), vec![MoveDefinition::slide(c(0, 0), c(1, 1))]);
}

/// Test the multi-jump fixture: every chain prefix is its own candidate, a
/// piece never jumps backward, and an occupied landing ends a chain.
#[test]
fn test_multi_jump_chain() {
    let b = board(
        "
        ..x.....
        .o......
        ........
        .o.o....
        ........
        .o.o....
        ........
        ...o.o..
        ......o.
        ",
    );

    let moves = legal_moves(&b, c(0, 2));

    assert_eq!(
        moves,
        vec![
            MoveDefinition::jump(c(0, 2), c(2, 0), &[c(1, 1)]),
            MoveDefinition::slide(c(0, 2), c(1, 3)),
            MoveDefinition::jump(c(0, 2), c(4, 2), &[c(1, 1), c(3, 1)]),
            MoveDefinition::jump(c(0, 2), c(6, 0), &[c(1, 1), c(3, 1), c(5, 1)]),
            MoveDefinition::jump(c(0, 2), c(6, 4), &[c(1, 1), c(3, 1), c(5, 3)]),
            MoveDefinition::jump(c(0, 2), c(8, 2), &[c(1, 1), c(3, 1), c(5, 3), c(7, 3)]),
        ]
    );
    assert_eq!(moves.iter().map(MoveDefinition::capture_count).max(), Some(4));
}

/// Test the whole-player query on the standard opening.
#[test]
fn test_opening_moves_for_each_player() {
    let b = Board::standard(&Default::default()).unwrap();

    let p1 = legal_moves_for_player(&b, 1).unwrap();
    let p2 = legal_moves_for_player(&b, 2).unwrap();

    // Front-row pieces: three with two slides, one on the edge with one.
    assert_eq!(p1.len(), 7);
    assert_eq!(p2.len(), 7);
    assert!(p1.iter().all(|mv| mv.from.row == 2 && mv.to.row == 3));
    assert!(p2.iter().all(|mv| mv.from.row == 5 && mv.to.row == 4));
}

// =============================================================================
// Move Application
// =============================================================================

/// Test that a two-jump chain removes both captured pieces and nothing else,
/// and that only the touched rows are replaced.
#[test]
fn test_execute_multi_jump() {
    let b = board(
        "
        ..x.x
        .o...
        .....
        .o.o.
        .....
        ",
    );

    let mv = MoveDefinition::jump(c(0, 2), c(4, 2), &[c(1, 1), c(3, 1)]);
    let next = apply_move(&b, Some(&mv)).unwrap();

    assert_eq!(
        next,
        board(
            "
            ....x
            .....
            .....
            ...o.
            ..x..
            ",
        )
    );

    assert_ne!(next, b);
    assert!(!next.shares_row(&b, 0));
    assert!(!next.shares_row(&b, 1));
    assert!(next.shares_row(&b, 2));
    assert!(!next.shares_row(&b, 3));
    assert!(!next.shares_row(&b, 4));

    // The input board is unchanged.
    assert_eq!(b.get(c(0, 2)), Some(Square::player(Player::One)));
    assert_eq!(b.get(c(1, 1)), Some(Square::player(Player::Two)));
}

/// Test that a moved piece leaves nothing to move at its origin.
#[test]
fn test_origin_is_empty_after_move() {
    let b = Board::standard(&Default::default()).unwrap();
    for mv in legal_moves_for_player(&b, 1).unwrap() {
        let next = apply_move(&b, Some(&mv)).unwrap();
        assert!(legal_moves(&next, mv.from).is_empty());
        assert_eq!(next.get(mv.to), Some(Square::player(Player::One)));
    }
}
