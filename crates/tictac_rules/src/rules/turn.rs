//! Turn sequencing from piece parity.
//!
//! Whose turn it is comes only from counting pieces, never from history.
//! Any mutation that bypasses the state machine can desync the turn order.

use crate::{Board, Token};
use tracing::instrument;

/// Returns the token due to move, or `Empty` when the board is full.
///
/// X moves while it has no more pieces than O, so X opens on an empty board.
#[instrument(skip(board))]
pub fn next_to_move(board: &Board) -> Token {
    let x_pieces = board.count(Token::X);
    let o_pieces = board.count(Token::O);
    if x_pieces + o_pieces >= 9 {
        Token::Empty
    } else if x_pieces <= o_pieces {
        Token::X
    } else {
        Token::O
    }
}

/// True iff somebody has won or nobody is left to move.
pub fn is_terminal(board: &Board) -> bool {
    board.has_winner() || next_to_move(board) == Token::Empty
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;
    use crate::Token::{Empty as E, O, X};

    #[test]
    fn test_x_opens() {
        assert_eq!(next_to_move(&Board::new()), X);
        assert!(!is_terminal(&Board::new()));
    }

    #[test]
    fn test_parity() {
        let board = Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]);
        assert_eq!(next_to_move(&board), O);
        let board = Board::from_rows([[X, O, E], [E, E, E], [E, E, E]]);
        assert_eq!(next_to_move(&board), X);
    }

    #[test]
    fn test_full_board_has_no_mover() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert_eq!(next_to_move(&board), E);
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_win_is_terminal() {
        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_alternates_while_filling_in_scan_order() {
        let mut board = Board::new();
        let mut movers = Vec::new();
        for cell in Cell::SCAN_ORDER {
            let mover = next_to_move(&board);
            movers.push(mover);
            board.set(cell, mover);
        }
        assert_eq!(movers, vec![X, O, X, O, X, O, X, O, X]);
        assert_eq!(next_to_move(&board), E);
    }
}
