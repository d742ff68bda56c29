//! Running game state.
//!
//! `GameState` is the single owner of "which board is current". It tracks
//! whose turn it is, how many pieces each player has captured and lost to
//! fire, and whether the wildfire expansion is switched on. Every board it
//! holds comes from the pure rules and wildfire functions; old boards handed
//! out by [`GameState::board`] stay valid after the state moves on.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Coord, EngineError, GameConfig, GameRng, Player, PlayerMap, Result};
use crate::rules::{apply_move, legal_moves_for, movable_origins, MoveDefinition, MoveIndex};
use crate::wildfire::{propagate_fire, start_fire_with, FireOutcome, IgnitionOutcome};

/// What the wildfire did at one turn boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WildfireReport {
    /// Pieces burned by spread and by any new fire.
    pub burned: PlayerMap<u32>,
    /// Whether a new fire was lit.
    pub new_fire: bool,
    /// Squares lit by the new fire.
    pub fires_started: u32,
}

/// Result of a full turn: the move, then the wildfire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub mover: Player,
    pub captured: usize,
    /// `None` when the fire rules are off.
    pub wildfire: Option<WildfireReport>,
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    turn: Player,
    turn_number: u32,
    captures: PlayerMap<u32>,
    burned: PlayerMap<u32>,
    fire_rules_active: bool,
    rng: GameRng,
}

impl GameState {
    /// Start a game on the standard layout described by `config.board`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let board = Board::standard(&config.board)?;
        Self::with_board(config, board, seed)
    }

    /// Start a game from an arbitrary position, player 1 to move.
    pub fn with_board(config: GameConfig, board: Board, seed: u64) -> Result<Self> {
        config.wildfire.validate()?;
        Ok(Self {
            config,
            board,
            turn: Player::One,
            turn_number: 1,
            captures: PlayerMap::default(),
            burned: PlayerMap::default(),
            fire_rules_active: config.fire_rules_active,
            rng: GameRng::new(seed),
        })
    }

    /// Fresh standard board, counters cleared, player 1 to move.
    /// The fire-rules switch and the RNG stream carry over.
    pub fn reset(&mut self) -> Result<()> {
        self.board = Board::standard(&self.config.board)?;
        self.turn = Player::One;
        self.turn_number = 1;
        self.captures = PlayerMap::default();
        self.burned = PlayerMap::default();
        tracing::debug!("game reset");
        Ok(())
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Turn counter, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Opponent pieces `player` has captured.
    #[must_use]
    pub fn captures(&self, player: Player) -> u32 {
        self.captures[player]
    }

    /// Pieces of `player` destroyed by fire.
    #[must_use]
    pub fn burned(&self, player: Player) -> u32 {
        self.burned[player]
    }

    #[must_use]
    pub fn fire_rules_active(&self) -> bool {
        self.fire_rules_active
    }

    // === Moves ===

    /// Every legal move for the player to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<MoveDefinition> {
        legal_moves_for(&self.board, self.turn, &self.config.rules)
    }

    /// Legal moves for the player to move, indexed for lookup.
    #[must_use]
    pub fn move_index(&self) -> MoveIndex {
        MoveIndex::new(self.legal_moves())
    }

    /// Squares of the player to move that can move.
    #[must_use]
    pub fn movable_origins(&self) -> Vec<Coord> {
        movable_origins(&self.board, self.turn, &self.config.rules)
    }

    /// Play `mv` for the player to move and pass the turn.
    ///
    /// The move must be one of [`GameState::legal_moves`]; anything else is
    /// `InvalidMoveDefinition` and leaves the state untouched.
    pub fn execute_move(&mut self, mv: &MoveDefinition) -> Result<()> {
        if !self.board.get(mv.from).is_some_and(|sq| sq.owned_by(self.turn)) {
            return Err(EngineError::InvalidMoveDefinition(format!(
                "{} does not hold a piece of {}",
                mv.from, self.turn
            )));
        }
        if !self.legal_moves().contains(mv) {
            return Err(EngineError::InvalidMoveDefinition(format!(
                "{mv} is not a legal move for {}",
                self.turn
            )));
        }

        self.board = apply_move(&self.board, Some(mv))?;
        self.captures[self.turn] += mv.capture_count() as u32;
        tracing::debug!(player = %self.turn, turn = self.turn_number, %mv, "move executed");

        self.turn = self.turn.opponent();
        self.turn_number += 1;
        Ok(())
    }

    /// The winner, if the player to move is out of pieces or out of moves.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.legal_moves().is_empty().then(|| self.turn.opponent())
    }

    // === Wildfire ===

    /// Flip the wildfire expansion on or off. Returns the new setting.
    pub fn toggle_fire_rules(&mut self) -> bool {
        self.fire_rules_active = !self.fire_rules_active;
        self.fire_rules_active
    }

    /// Light a fire with the configured parameters.
    pub fn light_fire(&mut self) -> Result<IgnitionOutcome> {
        let outcome = start_fire_with(&self.board, &self.config.wildfire, &mut self.rng)?;
        self.board = outcome.board.clone();
        self.add_burned(&outcome.burned);
        Ok(outcome)
    }

    /// Advance the fire one generation.
    pub fn propagate_fire(&mut self) -> FireOutcome {
        let outcome = propagate_fire(&self.board);
        self.board = outcome.board.clone();
        self.add_burned(&outcome.burned);
        outcome
    }

    /// Turn-boundary wildfire: spread once, then maybe light a new fire.
    ///
    /// Does nothing and returns `None` while the fire rules are off.
    pub fn end_of_turn_wildfire(&mut self) -> Result<Option<WildfireReport>> {
        if !self.fire_rules_active {
            return Ok(None);
        }

        let spread = self.propagate_fire();
        let mut report = WildfireReport {
            burned: spread.burned,
            ..WildfireReport::default()
        };

        if self.rng.gen_bool(self.config.wildfire.new_fire_chance) {
            let lit = self.light_fire()?;
            for player in Player::ALL {
                report.burned[player] += lit.burned[player];
            }
            report.new_fire = true;
            report.fires_started = lit.fires_started;
        }

        Ok(Some(report))
    }

    /// Play a move, then run the turn-boundary wildfire.
    pub fn play_turn(&mut self, mv: &MoveDefinition) -> Result<TurnReport> {
        let mover = self.turn;
        self.execute_move(mv)?;
        let wildfire = self.end_of_turn_wildfire()?;
        Ok(TurnReport {
            mover,
            captured: mv.capture_count(),
            wildfire,
        })
    }

    fn add_burned(&mut self, burned: &PlayerMap<u32>) {
        for (player, &count) in burned.iter() {
            self.burned[player] += count;
        }
    }
}
