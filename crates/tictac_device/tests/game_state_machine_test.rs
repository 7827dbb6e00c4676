//! Tests for the round state machine.

use tictac_device::{GameStateMachine, Outcome, Phase, Prompt, Transition};
use tictac_rules::{Board, Cell, Token};

fn cell(col: u8, row: u8) -> Cell {
    Cell::new(col, row).unwrap()
}

/// Plays the human's taps, answering each with the computer's move when it
/// is the computer's turn.
fn play(game: &mut GameStateMachine, taps: &[(u8, u8)]) {
    for &(col, row) in taps {
        game.human_move(cell(col, row)).expect("tap should be accepted");
        if game.phase() == Phase::ComputerThinking {
            game.computer_move().unwrap().expect("computer should move");
        }
    }
}

#[test]
fn test_start_is_idempotent() {
    let mut game = GameStateMachine::new();
    game.start();
    let first = (game.board().clone(), game.phase());
    let t = game.start();
    assert_eq!(t, Transition::new(Phase::HumanToMove, Phase::HumanToMove));
    assert_eq!((game.board().clone(), game.phase()), first);
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.phase(), Phase::HumanToMove);
}

#[test]
fn test_first_tap_on_fresh_machine_plays() {
    let mut game = GameStateMachine::new();
    assert_eq!(game.phase(), Phase::NewGame);

    let t = game.human_move(cell(0, 0)).unwrap();
    assert_eq!(t, Transition::new(Phase::NewGame, Phase::ComputerThinking));
    assert_eq!(game.board().get(cell(0, 0)), Token::X);

    game.computer_move().unwrap().unwrap();
    assert_eq!(game.board().get(cell(0, 1)), Token::O);
    assert_eq!(game.phase(), Phase::HumanToMove);
}

#[test]
fn test_corner_opening_answered_in_scan_order() {
    let mut game = GameStateMachine::new();
    game.start();

    let t = game.human_move(cell(0, 0)).unwrap();
    assert_eq!(t.to, Phase::ComputerThinking);
    assert_eq!(game.prompt(), Prompt::Thinking);

    let t = game.computer_move().unwrap().unwrap();
    assert_eq!(t, Transition::new(Phase::ComputerThinking, Phase::HumanToMove));
    assert_eq!(game.board().get(cell(0, 1)), Token::O);
    assert_eq!(game.board().count(Token::O), 1);
}

#[test]
fn test_taps_ignored_while_thinking() {
    let mut game = GameStateMachine::new();
    game.start();
    game.human_move(cell(0, 0));
    let before = game.board().clone();

    assert_eq!(game.human_move(cell(2, 2)), None);
    assert_eq!(game.board(), &before);
    assert_eq!(game.phase(), Phase::ComputerThinking);
}

#[test]
fn test_tap_on_occupied_cell_ignored() {
    let mut game = GameStateMachine::new();
    play(&mut game, &[(0, 0)]);
    assert_eq!(game.phase(), Phase::HumanToMove);

    assert_eq!(game.human_move(cell(0, 0)), None);
    assert_eq!(game.human_move(cell(0, 1)), None);
    assert_eq!(game.board().count(Token::X), 1);
}

#[test]
fn test_movers_alternate_until_terminal() {
    let mut game = GameStateMachine::new();
    game.start();
    let mut movers = Vec::new();
    for (col, row) in [(0, 0), (0, 2), (1, 1), (1, 2), (2, 1)] {
        movers.push(game.next_to_move());
        game.human_move(cell(col, row));
        if game.phase() == Phase::ComputerThinking {
            movers.push(game.next_to_move());
            game.computer_move().unwrap();
        }
    }
    assert_eq!(
        movers,
        vec![
            Token::X,
            Token::O,
            Token::X,
            Token::O,
            Token::X,
            Token::O,
            Token::X,
            Token::O,
            Token::X
        ]
    );
    assert_eq!(game.next_to_move(), Token::Empty);
}

#[test]
fn test_full_board_is_tie_and_tap_restarts() {
    let mut game = GameStateMachine::new();
    play(&mut game, &[(0, 0), (0, 2), (1, 1), (1, 2), (2, 1)]);

    assert!(game.board().is_full());
    assert_eq!(game.board().winner(), Token::Empty);
    assert_eq!(game.phase(), Phase::RoundOver(Outcome::Tie));
    assert_eq!(game.prompt(), Prompt::Tie);

    let t = game.human_move(cell(1, 1)).unwrap();
    assert_eq!(t.from, Phase::RoundOver(Outcome::Tie));
    assert_eq!(t.to, Phase::HumanToMove);
    assert_eq!(game.board(), &Board::new());
}

#[test]
fn test_human_win() {
    let mut game = GameStateMachine::new();
    play(&mut game, &[(0, 0), (0, 2), (1, 1), (2, 2)]);
    assert_eq!(game.phase(), Phase::RoundOver(Outcome::HumanWin));
    assert_eq!(game.prompt(), Prompt::HumanWins);
}

#[test]
fn test_computer_win() {
    let mut game = GameStateMachine::new();
    play(&mut game, &[(0, 0), (2, 2), (0, 2)]);
    assert_eq!(game.phase(), Phase::RoundOver(Outcome::ComputerWin));
    assert_eq!(game.prompt(), Prompt::ComputerWins);
    assert!(game.board().has_three_in_row(Token::O));
}

#[test]
fn test_tap_after_round_over_resets() {
    let mut game = GameStateMachine::new();
    play(&mut game, &[(0, 0), (2, 2), (0, 2)]);
    assert!(game.phase().is_round_over());

    game.human_move(cell(2, 0)).unwrap();
    assert_eq!(game.phase(), Phase::HumanToMove);
    assert_eq!(game.board(), &Board::new());

    // The restarting tap is consumed; the next one plays.
    let t = game.human_move(cell(2, 0)).unwrap();
    assert_eq!(t.to, Phase::ComputerThinking);
    assert_eq!(game.board().get(cell(2, 0)), Token::X);
}

#[test]
fn test_computer_move_after_round_over_is_noop() {
    let mut game = GameStateMachine::new();
    play(&mut game, &[(0, 0), (0, 2), (1, 1), (2, 2)]);
    let before = game.board().clone();
    assert_eq!(game.computer_move(), Ok(None));
    assert_eq!(game.board(), &before);
}

#[test]
fn test_continue_game_keeps_board() {
    let mut game = GameStateMachine::new();
    play(&mut game, &[(0, 0)]);
    game.human_move(cell(2, 2));
    let before = game.board().clone();

    let t = game.continue_game();
    assert_eq!(t, Transition::new(Phase::ComputerThinking, Phase::ComputerThinking));
    assert_eq!(game.board(), &before);
}
