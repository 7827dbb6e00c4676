//! The 3x3 board.

use crate::rules::win;
use crate::{Cell, Token};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// Every cell holds exactly one [`Token`]. Cells are addressed by [`Cell`],
/// so out-of-range access is rejected before it reaches the board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[col][row]`.
    cells: [[Token; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from row-major rows, top row first.
    ///
    /// `rows[r][c]` becomes the token at column `c`, row `r`, so a literal
    /// reads the way the board looks on screen.
    pub fn from_rows(rows: [[Token; 3]; 3]) -> Self {
        let mut board = Self::new();
        for cell in Cell::SCAN_ORDER {
            board.set(cell, rows[cell.row() as usize][cell.col() as usize]);
        }
        board
    }

    /// Sets every cell to [`Token::Empty`].
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cells = [[Token::Empty; 3]; 3];
    }

    /// Writes a token into a cell. Legality is the caller's responsibility.
    pub fn set(&mut self, cell: Cell, token: Token) {
        self.cells[cell.col() as usize][cell.row() as usize] = token;
    }

    /// Reads the token at a cell.
    pub fn get(&self, cell: Cell) -> Token {
        self.cells[cell.col() as usize][cell.row() as usize]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Token::Empty
    }

    /// True iff `token` fills a whole row, column or diagonal.
    pub fn has_three_in_row(&self, token: Token) -> bool {
        win::has_three_in_row(self, token)
    }

    /// The winning token, or [`Token::Empty`] when nobody has three in a row.
    ///
    /// X is checked before O. A board showing both is unreachable through the
    /// state machine; if one is built by hand, X is reported.
    pub fn winner(&self) -> Token {
        win::winner(self)
    }

    /// Shorthand for `winner() != Token::Empty`.
    pub fn has_winner(&self) -> bool {
        self.winner() != Token::Empty
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|t| *t != Token::Empty)
    }

    /// Number of cells holding `token`.
    pub fn count(&self, token: Token) -> usize {
        self.cells.iter().flatten().filter(|t| **t == token).count()
    }

    /// Empty cells in scan order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::SCAN_ORDER
            .into_iter()
            .filter(move |cell| self.is_empty(*cell))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            let line = (0..3)
                .map(|col| self.cells[col][row].to_string())
                .collect::<Vec<_>>()
                .join("|");
            if row < 2 {
                writeln!(f, "{}", line)?;
            } else {
                write!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Token::{Empty as E, O, X};

    fn cell(col: u8, row: u8) -> Cell {
        Cell::new(col, row).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells().count(), 9);
        assert!(!board.is_full());
        assert_eq!(board.winner(), Token::Empty);
    }

    #[test]
    fn test_set_get_no_aliasing() {
        let mut board = Board::new();
        board.set(cell(2, 0), X);
        assert_eq!(board.get(cell(2, 0)), X);
        assert_eq!(board.get(cell(0, 2)), E);
        assert_eq!(board.count(X), 1);
    }

    #[test]
    fn test_clear() {
        let mut board = Board::from_rows([[X, O, X], [O, X, O], [O, X, O]]);
        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_from_rows_is_row_major() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        assert_eq!(board.get(cell(1, 0)), X);
        assert_eq!(board.get(cell(0, 1)), O);
        assert_eq!(board.get(cell(2, 1)), E);
    }

    #[test]
    fn test_is_full() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert!(board.is_full());
        assert_eq!(board.winner(), Token::Empty);
    }

    #[test]
    fn test_display() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, X]]);
        assert_eq!(board.to_string(), "X|.|.\n.|O|.\n.|.|X");
    }
}
