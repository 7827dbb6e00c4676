//! Computer opponent move selection.
//!
//! The shipped opponent is a one-ply heuristic, not a search. A human who
//! sets up a fork beats it, and that is the behavior players know.

use crate::{Board, Cell, RulesError, Token};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which rule of the heuristic produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Tier {
    /// Completes a line for the mover.
    #[display("win")]
    WinNow,
    /// Occupies the cell that would complete the opponent's line.
    #[display("block")]
    Block,
    /// First empty cell in scan order.
    #[display("first free")]
    FirstFree,
}

/// A chosen cell and the reason it was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Cell to play.
    pub cell: Cell,
    /// Rule that picked it.
    pub tier: Tier,
}

/// Strategy that picks the computer's move.
pub trait MoveSelector {
    /// Picks a cell for `token` to play on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::NoLegalMove`] if the board has no empty cell.
    fn select_move(&self, board: &Board, token: Token) -> Result<Selection, RulesError>;
}

/// Fixed win, block, first-free heuristic.
///
/// Each tier scans cells column by column (col outer, row inner) and takes
/// the first match.
#[derive(Debug, Clone, Copy, Default)]
pub struct TierHeuristic;

impl TierHeuristic {
    /// Creates the heuristic.
    pub fn new() -> Self {
        Self
    }

    /// First empty cell where placing `token` gives `token` three in a row.
    fn completing_cell(board: &Board, token: Token) -> Option<Cell> {
        let mut scratch = board.clone();
        board.empty_cells().find(|cell| {
            scratch.set(*cell, token);
            let completes = scratch.has_three_in_row(token);
            scratch.set(*cell, Token::Empty);
            completes
        })
    }
}

impl MoveSelector for TierHeuristic {
    #[instrument(skip(self, board), fields(token = %token))]
    fn select_move(&self, board: &Board, token: Token) -> Result<Selection, RulesError> {
        let selection = if let Some(cell) = Self::completing_cell(board, token) {
            Selection {
                cell,
                tier: Tier::WinNow,
            }
        } else if let Some(cell) = Self::completing_cell(board, token.opponent()) {
            Selection {
                cell,
                tier: Tier::Block,
            }
        } else {
            let cell = board.empty_cells().next().ok_or(RulesError::NoLegalMove)?;
            Selection {
                cell,
                tier: Tier::FirstFree,
            }
        };

        debug!(cell = %selection.cell, tier = %selection.tier, "Selected move");
        Ok(selection)
    }
}
