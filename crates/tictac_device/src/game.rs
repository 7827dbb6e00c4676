//! Round state machine.
//!
//! Owns the board, derives the phase from it after every mutation and is the
//! only legitimate writer of board cells. Side effects (painting, timers) are
//! left to the caller, which receives a [`Transition`] for every change.

use crate::phase::{Outcome, Phase, Prompt};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tictac_rules::{Board, Cell, MoveSelector, RulesError, TierHeuristic, Token, turn};
use tracing::{debug, info, instrument, warn};

/// A phase change produced by a state-machine action.
///
/// `from == to` is possible, e.g. restarting while already waiting for the
/// human; the board may still have changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Transition {
    /// Phase before the action.
    pub from: Phase,
    /// Phase after the action.
    pub to: Phase,
}

/// Tic-tac-toe controller for one human (X) against the computer (O).
#[derive(Debug, Clone)]
pub struct GameStateMachine<S = TierHeuristic> {
    board: Board,
    phase: Phase,
    next_to_move: Token,
    selector: S,
}

impl GameStateMachine<TierHeuristic> {
    /// Creates a machine in [`Phase::NewGame`] with the stock opponent.
    #[instrument]
    pub fn new() -> Self {
        Self::with_selector(TierHeuristic::new())
    }
}

impl Default for GameStateMachine<TierHeuristic> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MoveSelector> GameStateMachine<S> {
    /// Creates a machine in [`Phase::NewGame`] using a custom opponent.
    pub fn with_selector(selector: S) -> Self {
        Self {
            board: Board::new(),
            phase: Phase::NewGame,
            next_to_move: Token::X,
            selector,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the active phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Token due to move, `Empty` on a full board.
    pub fn next_to_move(&self) -> Token {
        self.next_to_move
    }

    /// Prompt for the active phase.
    pub fn prompt(&self) -> Prompt {
        self.phase.prompt()
    }

    /// Clears the board and hands the first move to the human.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn start(&mut self) -> Transition {
        info!("Starting new round");
        self.board.clear();
        self.continue_game_from(self.phase)
    }

    /// Recomputes whose turn it is and the phase from the current board.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn continue_game(&mut self) -> Transition {
        self.continue_game_from(self.phase)
    }

    /// Applies a tap on `cell`.
    ///
    /// A tap on a finished board starts a new round instead of playing. A tap
    /// in [`Phase::NewGame`] plays X on the empty board. Taps out of turn or
    /// on occupied cells are ignored and return `None`.
    #[instrument(skip(self), fields(cell = %cell, phase = %self.phase))]
    pub fn human_move(&mut self, cell: Cell) -> Option<Transition> {
        if self.phase.is_round_over() || turn::is_terminal(&self.board) {
            return Some(self.start());
        }

        if !matches!(self.phase, Phase::NewGame | Phase::HumanToMove)
            || self.next_to_move != Token::HUMAN
        {
            debug!("Ignoring tap out of turn");
            return None;
        }

        if !self.board.is_empty(cell) {
            debug!("Ignoring tap on occupied cell");
            return None;
        }

        self.board.set(cell, Token::HUMAN);
        Some(self.continue_game())
    }

    /// Plays the computer's reply. Only acts in [`Phase::ComputerThinking`].
    ///
    /// # Errors
    ///
    /// Propagates the selector's error if it cannot find a move, which the
    /// phase derivation rules out for the stock opponent.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn computer_move(&mut self) -> Result<Option<Transition>, RulesError> {
        if self.phase != Phase::ComputerThinking {
            warn!("Computer move requested outside its turn");
            return Ok(None);
        }

        let selection = self.selector.select_move(&self.board, Token::COMPUTER)?;
        debug_assert!(self.board.is_empty(selection.cell));
        info!(cell = %selection.cell, tier = %selection.tier, "Computer played");
        self.board.set(selection.cell, Token::COMPUTER);
        Ok(Some(self.continue_game()))
    }

    fn continue_game_from(&mut self, from: Phase) -> Transition {
        self.next_to_move = turn::next_to_move(&self.board);
        self.phase = match self.board.winner() {
            Token::X => Phase::RoundOver(Outcome::HumanWin),
            Token::O => Phase::RoundOver(Outcome::ComputerWin),
            Token::Empty => match self.next_to_move {
                Token::Empty => Phase::RoundOver(Outcome::Tie),
                Token::X => Phase::HumanToMove,
                Token::O => Phase::ComputerThinking,
            },
        };
        debug!(from = %from, to = %self.phase, "Phase recomputed");
        Transition::new(from, self.phase)
    }
}
