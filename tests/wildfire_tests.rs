//! Wildfire integration tests: fire spread, ignition and turn-boundary play.

use wildfire_checkers::core::{Board, BoardConfig, GameConfig, GameRng, Player, WildfireConfig};
use wildfire_checkers::game::GameState;
use wildfire_checkers::wildfire::{propagate_fire, start_fire};

fn board(text: &str) -> Board {
    text.parse().expect("fixture board")
}

// =============================================================================
// Propagation
// =============================================================================

/// Test that a single fire with no burning neighbours burns out.
#[test]
fn test_single_fire_extinguishes() {
    let b = board(
        "
        ...
        .*.
        ...
        ",
    );

    let outcome = propagate_fire(&b);

    assert_eq!(outcome.board, Board::empty(3, 3).unwrap());
    assert_eq!(outcome.burned[Player::One], 0);
    assert_eq!(outcome.burned[Player::Two], 0);
}

/// Test that a fire-free standard board is left alone.
#[test]
fn test_no_spontaneous_ignition() {
    let b = Board::standard(&BoardConfig::default()).unwrap();
    let outcome = propagate_fire(&b);
    assert_eq!(outcome.board, b);
    assert_eq!(outcome.total_burned(), 0);
}

/// Test that fire advancing into an army burns pieces of the right player.
#[test]
fn test_fire_front_burns_pieces() {
    let b = board(
        "
        .x.x.
        *****
        .....
        .o.o.
        ",
    );

    let outcome = propagate_fire(&b);

    // Row 0 squares each see three fires from the row below, except corners.
    assert_eq!(outcome.burned[Player::One], 2);
    assert_eq!(outcome.burned[Player::Two], 0);
    assert_eq!(outcome.board.count_pieces(Player::One), 0);
    assert_eq!(outcome.board.count_pieces(Player::Two), 2);
}

/// Test that successive generations are computed from the previous board only.
#[test]
fn test_generations_are_simultaneous() {
    let glider = board(
        "
        .*....
        ..*...
        ***...
        ......
        ......
        ......
        ",
    );

    let mut b = glider.clone();
    for _ in 0..4 {
        b = propagate_fire(&b).board;
    }

    // After four generations a glider has moved one square down and right.
    assert_eq!(
        b,
        board(
            "
            ......
            ..*...
            ...*..
            .***..
            ......
            ......
            ",
        )
    );
    assert_eq!(glider.get((0, 1).into()).map(|sq| sq.is_on_fire()), Some(true));
}

// =============================================================================
// Ignition
// =============================================================================

/// Test that the same seed lights the same fire on the same board.
#[test]
fn test_ignition_is_reproducible() {
    let b = Board::standard(&BoardConfig::default()).unwrap();

    let first = start_fire(&b, 0.5, 0.8, 2, &mut GameRng::new(2024)).unwrap();
    let second = start_fire(&b, 0.5, 0.8, 2, &mut GameRng::new(2024)).unwrap();

    assert_eq!(first, second);
    assert!(first.fires_started <= 25);
}

/// Test that burned pieces are counted exactly once and disappear.
#[test]
fn test_ignition_counts_match_board() {
    let b = Board::standard(&BoardConfig::default()).unwrap();

    for seed in 0..20 {
        let outcome = start_fire(&b, 0.7, 0.3, 2, &mut GameRng::new(seed)).unwrap();
        for player in Player::ALL {
            let lost = b.count_pieces(player) - outcome.board.count_pieces(player);
            assert_eq!(lost as u32, outcome.burned[player]);
        }
        let lit = outcome.board.iter().filter(|(_, sq)| sq.is_on_fire()).count();
        assert_eq!(lit as u32, outcome.fires_started);
    }
}

// =============================================================================
// Turn Boundary
// =============================================================================

/// Test a seeded game with fire on: tallies always match the pieces lost.
#[test]
fn test_seeded_game_with_fire() {
    let config = GameConfig::default()
        .with_wildfire(WildfireConfig::default().with_new_fire_chance(0.5))
        .with_fire_rules(true);
    let mut game = GameState::new(config, 11).unwrap();

    for _ in 0..30 {
        if game.winner().is_some() {
            break;
        }
        let mv = game.legal_moves()[0].clone();
        game.play_turn(&mv).unwrap();

        for player in Player::ALL {
            let on_board = game.board().count_pieces(player) as u32;
            let lost = game.captures(player.opponent()) + game.burned(player);
            assert_eq!(on_board + lost, 12);
        }
    }
}
