//! Round phases and the prompt text each one surfaces.

use serde::{Deserialize, Serialize};

/// How a finished round ended.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Outcome {
    /// X completed a line.
    #[display("human wins")]
    HumanWin,
    /// O completed a line.
    #[display("computer wins")]
    ComputerWin,
    /// Board filled with no line.
    #[display("tie")]
    Tie,
}

/// Stage of the current round. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Phase {
    /// Nothing started yet.
    #[display("new game")]
    NewGame,
    /// Waiting for the human to tap a cell.
    #[display("human to move")]
    HumanToMove,
    /// The move timer is running before the computer replies.
    #[display("computer thinking")]
    ComputerThinking,
    /// Round finished; the next tap starts a new one.
    #[display("round over ({_0})")]
    RoundOver(Outcome),
}

impl Phase {
    /// True for [`Phase::RoundOver`].
    pub fn is_round_over(self) -> bool {
        matches!(self, Phase::RoundOver(_))
    }

    /// Prompt shown on the render surface while this phase is active.
    pub fn prompt(self) -> Prompt {
        match self {
            Phase::NewGame => Prompt::Title,
            Phase::HumanToMove => Prompt::YourMove,
            Phase::ComputerThinking => Prompt::Thinking,
            Phase::RoundOver(Outcome::HumanWin) => Prompt::HumanWins,
            Phase::RoundOver(Outcome::ComputerWin) => Prompt::ComputerWins,
            Phase::RoundOver(Outcome::Tie) => Prompt::Tie,
        }
    }
}

/// Text for the single prompt label above the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Prompt {
    /// Shown before the first round.
    #[display("Tic Tac Toe")]
    Title,
    /// Human's turn.
    #[display("Your move")]
    YourMove,
    /// Computer's turn.
    #[display("Thinking...")]
    Thinking,
    /// Round summary: X won.
    #[display("You win!")]
    HumanWins,
    /// Round summary: O won.
    #[display("Mono wins!")]
    ComputerWins,
    /// Round summary: draw.
    #[display("Tie!")]
    Tie,
    /// Shown once the end-of-round pause elapses.
    #[display("Play again?")]
    PlayAgain,
}
