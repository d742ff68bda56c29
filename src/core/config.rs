//! Engine configuration types.
//!
//! - `BoardConfig`: dimensions of a standard starting layout
//! - `RulesConfig`: move-generation options
//! - `WildfireConfig`: ignition parameters for the wildfire expansion
//! - `GameConfig`: all of the above for a running game
//!
//! All of them are plain serde structs with `Default` and `with_*` builders.
//! Call `validate()` before using a config loaded from outside.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// Dimensions of a standard starting board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows (default: 8).
    pub rows: usize,

    /// Number of columns (default: 8).
    pub cols: usize,

    /// Rows filled with pieces at each end (default: 3).
    /// Requires `rows >= 2 * player_rows + 1`.
    pub player_rows: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 8,
            player_rows: 3,
        }
    }
}

impl BoardConfig {
    /// Set the board dimensions.
    #[must_use]
    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set how many rows each army fills.
    #[must_use]
    pub fn with_player_rows(mut self, player_rows: usize) -> Self {
        self.player_rows = player_rows;
        self
    }

    /// Check that the armies are separated by at least one neutral row.
    pub fn validate(&self) -> Result<()> {
        if self.cols == 0 {
            return Err(EngineError::InvalidConfiguration(
                "board must have at least one column".to_string(),
            ));
        }
        if self.player_rows * 2 + 1 > self.rows {
            return Err(EngineError::InvalidConfiguration(format!(
                "{} rows cannot hold {} player rows per side plus a neutral row",
                self.rows, self.player_rows
            )));
        }
        Ok(())
    }
}

/// Move-generation options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Whether a burning square without a piece blocks a slide or jump
    /// landing (default: true).
    pub fire_blocks_landing: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            fire_blocks_landing: true,
        }
    }
}

impl RulesConfig {
    /// Allow or forbid landing on burning squares.
    #[must_use]
    pub fn with_fire_blocks_landing(mut self, blocks: bool) -> Self {
        self.fire_blocks_landing = blocks;
        self
    }
}

/// Wildfire ignition parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WildfireConfig {
    /// Chance in [0, 1] that each square near a new fire's origin lights
    /// (default: 0.5).
    pub intensity: f64,

    /// Extra chance in [0, 1] that a piece on a lighting square resists
    /// (default: 0.8). 0 = always burns, 1 = never burns.
    pub checker_resistance: f64,

    /// Radius of the box around the origin that may light (default: 2).
    pub spread: u32,

    /// Chance in [0, 1] of a new fire starting at each turn boundary
    /// (default: 0.33).
    pub new_fire_chance: f64,
}

impl Default for WildfireConfig {
    fn default() -> Self {
        Self {
            intensity: 0.5,
            checker_resistance: 0.8,
            spread: 2,
            new_fire_chance: 0.33,
        }
    }
}

impl WildfireConfig {
    #[must_use]
    pub fn with_intensity(mut self, intensity: f64) -> Self {
        self.intensity = intensity;
        self
    }

    #[must_use]
    pub fn with_checker_resistance(mut self, resistance: f64) -> Self {
        self.checker_resistance = resistance;
        self
    }

    #[must_use]
    pub fn with_spread(mut self, spread: u32) -> Self {
        self.spread = spread;
        self
    }

    #[must_use]
    pub fn with_new_fire_chance(mut self, chance: f64) -> Self {
        self.new_fire_chance = chance;
        self
    }

    /// Check that every probability lies in [0, 1] and spread is positive.
    pub fn validate(&self) -> Result<()> {
        validate_probability("intensity", self.intensity)?;
        validate_probability("checker_resistance", self.checker_resistance)?;
        validate_probability("new_fire_chance", self.new_fire_chance)?;
        if self.spread == 0 {
            return Err(EngineError::InvalidConfiguration(
                "spread must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }
}

/// Complete configuration of a running game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub board: BoardConfig,
    pub rules: RulesConfig,
    pub wildfire: WildfireConfig,

    /// Whether the wildfire expansion starts switched on (default: false).
    pub fire_rules_active: bool,
}

impl GameConfig {
    #[must_use]
    pub fn with_board(mut self, board: BoardConfig) -> Self {
        self.board = board;
        self
    }

    #[must_use]
    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_wildfire(mut self, wildfire: WildfireConfig) -> Self {
        self.wildfire = wildfire;
        self
    }

    #[must_use]
    pub fn with_fire_rules(mut self, active: bool) -> Self {
        self.fire_rules_active = active;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.board.validate()?;
        self.wildfire.validate()
    }
}

/// Reject NaN and anything outside [0, 1].
pub(crate) fn validate_probability(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(EngineError::InvalidConfiguration(format!(
            "{name} must be in [0, 1], got {value}"
        )))
    }
}
