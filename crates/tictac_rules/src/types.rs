//! Core domain types for tic-tac-toe.

use crate::RulesError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Contents of a single board cell.
///
/// X is always the human and O is always the computer.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Token {
    /// Nobody has played here.
    #[default]
    #[display(".")]
    Empty,
    /// The human's mark (moves first).
    #[display("X")]
    X,
    /// The computer's mark.
    #[display("O")]
    O,
}

impl Token {
    /// The token played by the human.
    pub const HUMAN: Token = Token::X;

    /// The token played by the computer.
    pub const COMPUTER: Token = Token::O;

    /// Returns the opposing token. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Token::X => Token::O,
            Token::O => Token::X,
            Token::Empty => Token::Empty,
        }
    }

    /// Returns true for `X` and `O`.
    pub fn is_player(self) -> bool {
        self != Token::Empty
    }
}

/// A validated board coordinate.
///
/// `col` and `row` are both in `0..=2`. Once a `Cell` exists, every board
/// access through it is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({col},{row})")]
pub struct Cell {
    col: u8,
    row: u8,
}

impl Cell {
    /// Number of cells along one side of the board.
    pub const SIDE: u8 = 3;

    /// All nine cells in scan order: column outer, row inner.
    pub const SCAN_ORDER: [Cell; 9] = [
        Cell { col: 0, row: 0 },
        Cell { col: 0, row: 1 },
        Cell { col: 0, row: 2 },
        Cell { col: 1, row: 0 },
        Cell { col: 1, row: 1 },
        Cell { col: 1, row: 2 },
        Cell { col: 2, row: 0 },
        Cell { col: 2, row: 1 },
        Cell { col: 2, row: 2 },
    ];

    /// Creates a cell, rejecting coordinates outside the 3x3 grid.
    #[instrument]
    pub fn new(col: u8, row: u8) -> Result<Self, RulesError> {
        if col >= Self::SIDE || row >= Self::SIDE {
            return Err(RulesError::CellOutOfRange { col, row });
        }
        Ok(Self { col, row })
    }

    /// Builds a cell from coordinates already known to be in range.
    pub(crate) const fn at(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Column (x) of this cell.
    pub fn col(self) -> u8 {
        self.col
    }

    /// Row (y) of this cell.
    pub fn row(self) -> u8 {
        self.row
    }
}

impl TryFrom<(u8, u8)> for Cell {
    type Error = RulesError;

    fn try_from((col, row): (u8, u8)) -> Result<Self, Self::Error> {
        Cell::new(col, row)
    }
}
