//! Error types.
//!
//! Two families:
//!
//! - [`GameError`]: precondition violations reported to the caller
//!   (wrong caller, unknown player, terminal game, bad setup).
//! - [`ValidationError`]: an illegal book. Never returned as `Err`; it is
//!   recorded on the submitting player and surfaced on the next poll.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::UserId;
use crate::game::GameStatus;

/// Precondition violations at the engine boundary.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("only the host ({host}) may start the game")]
    NotHost { host: UserId },

    #[error("game has already been started")]
    AlreadyStarted,

    #[error("game is {status} and accepts no further moves")]
    Inactive { status: GameStatus },

    #[error("{0} is not seated at this game")]
    UnknownPlayer(UserId),

    #[error("{0} is seated more than once")]
    DuplicatePlayer(UserId),

    #[error("host {0} must be one of the participants")]
    HostNotSeated(UserId),

    #[error("a game needs between {min} and {max} players, got {got}")]
    InvalidPlayerCount { min: usize, max: usize, got: usize },

    #[error("no game with id {0}")]
    UnknownGame(u64),

    #[error("checkpoint could not be encoded or decoded: {0}")]
    Checkpoint(#[from] bincode::Error),

    #[error("checkpoint holds an inconsistent game: {0}")]
    CorruptCheckpoint(&'static str),
}

/// Why a submitted book was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("need at least one card")]
    Empty,

    #[error("all cards must share one rank")]
    MixedRanks,
}
