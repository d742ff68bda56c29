//! The board grid.
//!
//! ## Layout
//!
//! Row 0 is player 1's home edge. Every row has the same length for the
//! lifetime of the board.
//!
//! ## Out-of-range access
//!
//! `get` and `contents` return `None` for any coordinate off the board, so
//! search code can probe past an edge without bounds checks of its own.
//!
//! ## Persistence
//!
//! The row spine is an `im::Vector` of reference-counted rows. Cloning a
//! board only bumps reference counts, and writing a square copies only the
//! row that holds it: rows that did not change stay shared with every earlier
//! version of the board.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::config::BoardConfig;
use super::coord::Coord;
use super::error::{EngineError, Result};
use super::player::Player;
use super::square::Square;

/// Immutable rectangular grid of squares.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Square>>", into = "Vec<Vec<Square>>")]
pub struct Board {
    rows: Vector<Arc<Vec<Square>>>,
    cols: usize,
}

impl Board {
    /// Build a board from explicit rows.
    ///
    /// Fails if there are no rows, no columns, or rows of unequal length.
    pub fn from_rows(rows: Vec<Vec<Square>>) -> Result<Self> {
        let cols = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => {
                return Err(EngineError::InvalidConfiguration(
                    "board must have at least one row and one column".to_string(),
                ))
            }
        };

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(EngineError::InvalidConfiguration(format!(
                "row {index} has {} squares, expected {cols}",
                row.len()
            )));
        }

        Ok(Self {
            rows: rows.into_iter().map(Arc::new).collect(),
            cols,
        })
    }

    /// An all-empty board.
    pub fn empty(rows: usize, cols: usize) -> Result<Self> {
        Self::from_rows(vec![vec![Square::empty(); cols]; rows])
    }

    /// The standard starting layout.
    ///
    /// Player 1 fills the first `player_rows` rows and player 2 the last
    /// `player_rows` rows, on squares where `(row + col)` is odd.
    ///
    /// ```
    /// use wildfire_checkers::core::{Board, BoardConfig, Player};
    ///
    /// let board = Board::standard(&BoardConfig::default()).unwrap();
    /// assert_eq!(board.count_pieces(Player::One), 12);
    /// assert_eq!(board.count_pieces(Player::Two), 12);
    /// ```
    pub fn standard(config: &BoardConfig) -> Result<Self> {
        config.validate()?;

        let rows: Vec<Vec<Square>> = (0..config.rows)
            .map(|r| {
                let owner = if r < config.player_rows {
                    Some(Player::One)
                } else if r >= config.rows - config.player_rows {
                    Some(Player::Two)
                } else {
                    None
                };
                (0..config.cols)
                    .map(|c| match owner {
                        Some(player) if (r + c) % 2 == 1 => Square::player(player),
                        _ => Square::empty(),
                    })
                    .collect()
            })
            .collect();

        Self::from_rows(rows)
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `coord` lies on the board.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.index_of(coord).is_some()
    }

    /// Square at `coord`, or `None` off the board.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Square> {
        let (r, c) = self.index_of(coord)?;
        self.rows.get(r).and_then(|row| row.get(c)).copied()
    }

    /// Square at `coord` translated by (dr, dc), or `None` off the board.
    #[must_use]
    pub fn contents(&self, coord: Coord, dr: i32, dc: i32) -> Option<Square> {
        self.get(coord.offset(dr, dc))
    }

    /// A new board with `coord` set to `square`, or `None` off the board.
    #[must_use]
    pub fn set(&self, coord: Coord, square: Square) -> Option<Self> {
        let mut next = self.clone();
        next.put(coord, square).then_some(next)
    }

    /// Overwrite one square in place. Only the touched row is copied if it
    /// is shared with another board.
    pub(crate) fn put(&mut self, coord: Coord, square: Square) -> bool {
        let Some((r, c)) = self.index_of(coord) else {
            return false;
        };
        match self.rows.get_mut(r).and_then(|row| Arc::make_mut(row).get_mut(c)) {
            Some(slot) => {
                *slot = square;
                true
            }
            None => false,
        }
    }

    /// Iterate over every square in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Square)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &square)| (Coord::new(r as i32, c as i32), square))
        })
    }

    /// Coordinates of every piece owned by `player`, row-major.
    #[must_use]
    pub fn player_squares(&self, player: Player) -> Vec<Coord> {
        self.iter()
            .filter(|(_, square)| square.owned_by(player))
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Number of pieces owned by `player`.
    #[must_use]
    pub fn count_pieces(&self, player: Player) -> usize {
        self.iter().filter(|(_, square)| square.owned_by(player)).count()
    }

    /// Whether any square is on fire.
    #[must_use]
    pub fn has_fire(&self) -> bool {
        self.iter().any(|(_, square)| square.is_on_fire())
    }

    /// Whether row `row` is physically shared with the same row of `other`.
    #[must_use]
    pub fn shares_row(&self, other: &Board, row: usize) -> bool {
        match (self.rows.get(row), other.rows.get(row)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    fn index_of(&self, coord: Coord) -> Option<(usize, usize)> {
        let r = usize::try_from(coord.row).ok()?;
        let c = usize::try_from(coord.col).ok()?;
        (r < self.rows.len() && c < self.cols).then_some((r, c))
    }
}

impl TryFrom<Vec<Vec<Square>>> for Board {
    type Error = EngineError;

    fn try_from(rows: Vec<Vec<Square>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<Square>> {
    fn from(board: Board) -> Self {
        board
            .rows
            .into_iter()
            .map(|row| Arc::try_unwrap(row).unwrap_or_else(|shared| shared.to_vec()))
            .collect()
    }
}

/// One character per square, one line per row. See [`Square::symbol`].
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let line: String = row.iter().map(|square| square.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Parses the `Display` form. Whitespace inside a row is ignored and blank
/// lines are skipped, so fixtures can be indented and spaced out.
impl FromStr for Board {
    type Err = EngineError;

    fn from_str(text: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for (index, line) in text.lines().enumerate() {
            let row = line
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .map(|ch| {
                    Square::from_symbol(ch).ok_or_else(|| EngineError::ParseBoard {
                        line: index + 1,
                        reason: format!("unknown square '{ch}'"),
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Self::from_rows(rows).map_err(|err| EngineError::ParseBoard {
            line: 0,
            reason: err.to_string(),
        })
    }
}

/// Standard layout from raw dimensions.
///
/// Fails with `InvalidConfiguration` when `2 * player_rows + 1 > rows`.
pub fn generate_standard_board(rows: usize, cols: usize, player_rows: usize) -> Result<Board> {
    Board::standard(&BoardConfig {
        rows,
        cols,
        player_rows,
    })
}
