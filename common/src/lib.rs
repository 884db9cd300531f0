//! Board model, memoized minimax search, opponent policies and hints for 3x3
//! tic-tac-toe, plus the config and logging plumbing shared with the client.

pub mod config;
pub mod error;
pub mod games;
pub mod logger;

pub use error::{GameError, InvalidMoveReason, Result};
