//! Structured error types.
//!
//! [`GameError`] is the engine's taxonomy: every variant is a local
//! validation failure that leaves state untouched. [`ApiError`] is the
//! remote-session boundary taxonomy. Neither is fatal to the process; the
//! caller reports the error and retries or re-prompts.

use crate::core::{Orientation, Position};

/// A rejected engine operation. State is guaranteed unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("unknown player: {0:?}")]
    UnknownPlayer(String),

    #[error("position {0} is out of bounds")]
    OutOfBounds(Position),

    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Position, to: Position },

    #[error("{0:?} has no walls left")]
    NoWallsLeft(String),

    #[error("a {orientation} wall already occupies anchor {anchor}")]
    WallConflict {
        orientation: Orientation,
        anchor: Position,
    },

    #[error("invalid move or orientation token: {0:?}")]
    InvalidOrientation(String),

    #[error("this wall would enclose {0:?} away from their goal row")]
    PlayerWouldBeEnclosed(String),

    #[error("game already finished, winner: {winner:?}")]
    GameAlreadyFinished { winner: String },
}

/// A failed exchange with the remote game-session service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("unknown game: {0}")]
    UnknownGame(String),

    #[error("request rejected by the server: {0}")]
    Rejected(String),

    #[error("unexpected status {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
