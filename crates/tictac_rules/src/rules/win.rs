//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Token};

/// The eight winning lines: three columns, three rows, two diagonals.
pub const LINES: [[Cell; 3]; 8] = [
    // Columns
    [Cell::at(0, 0), Cell::at(0, 1), Cell::at(0, 2)],
    [Cell::at(1, 0), Cell::at(1, 1), Cell::at(1, 2)],
    [Cell::at(2, 0), Cell::at(2, 1), Cell::at(2, 2)],
    // Rows
    [Cell::at(0, 0), Cell::at(1, 0), Cell::at(2, 0)],
    [Cell::at(0, 1), Cell::at(1, 1), Cell::at(2, 1)],
    [Cell::at(0, 2), Cell::at(1, 2), Cell::at(2, 2)],
    // Diagonals
    [Cell::at(0, 0), Cell::at(1, 1), Cell::at(2, 2)],
    [Cell::at(2, 0), Cell::at(1, 1), Cell::at(0, 2)],
];

/// Checks if `token` occupies every cell of at least one line.
///
/// This is the single win primitive: both "did X win" and "would O win if
/// it played here" go through it.
pub fn has_three_in_row(board: &Board, token: Token) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|cell| board.get(*cell) == token))
}

/// Returns X if X has three in a row, else O if O does, else `Empty`.
pub fn winner(board: &Board) -> Token {
    if has_three_in_row(board, Token::X) {
        Token::X
    } else if has_three_in_row(board, Token::O) {
        Token::O
    } else {
        Token::Empty
    }
}
