use thiserror::Error;

use crate::games::tictactoe::{Move, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    OutOfRange,
    Occupied,
    OutOfTurn(Player),
}

impl std::fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMoveReason::OutOfRange => write!(f, "position must be between 0 and 8"),
            InvalidMoveReason::Occupied => write!(f, "that square is already taken"),
            InvalidMoveReason::OutOfTurn(expected) => write!(f, "it is {}'s turn", expected),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("invalid move at position {position}: {reason}")]
    InvalidMove {
        position: Move,
        reason: InvalidMoveReason,
    },

    #[error("no legal move available: the board is already decided")]
    NoLegalMove,

    #[error("the round is already over")]
    RoundOver,

    /// A hint or move was requested for the side that is not to move.
    #[error("it is {0}'s turn")]
    OutOfTurn(Player),

    #[error("board text must have 9 cells, got {got}")]
    InvalidBoardLength { got: usize },

    #[error("invalid character '{character}' at cell {position}")]
    InvalidCellCharacter { character: char, position: usize },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },
}

pub type Result<T> = std::result::Result<T, GameError>;
