//! Pure tic-tac-toe rules for the touch-device game.
//!
//! - [`Board`] stores the 3x3 grid and answers win/tie queries.
//! - [`turn`] derives whose move it is from piece parity.
//! - [`MoveSelector`] is the seam for computer opponents; [`TierHeuristic`]
//!   is the fixed win, block, first-free strategy.
//!
//! Nothing here owns timers or talks to hardware.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod rules;
mod selector;
mod types;

pub use board::Board;
pub use error::RulesError;
pub use rules::{turn, win};
pub use selector::{MoveSelector, Selection, Tier, TierHeuristic};
pub use types::{Cell, Token};
