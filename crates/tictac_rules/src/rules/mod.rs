//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the state machine and the move selector share one
//! definition of "three in a row" and "whose turn".

pub mod turn;
pub mod win;
