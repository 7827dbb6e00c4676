//! Errors raised when a caller breaks the rules-crate contract.

use derive_more::{Display, Error};

/// Contract violation detected by the rules crate.
///
/// These never arise from legitimate input once the state machine gates its
/// calls; they point at a bug in the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RulesError {
    /// A coordinate fell outside the 3x3 grid.
    #[display("Cell ({}, {}) is outside the 3x3 board", col, row)]
    CellOutOfRange {
        /// Requested column.
        col: u8,
        /// Requested row.
        row: u8,
    },

    /// A move was requested on a board with no empty cell.
    #[display("No legal move: the board is full")]
    NoLegalMove,
}
