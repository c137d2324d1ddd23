use thiserror::Error;

use crate::card::CardId;
use crate::encounter::MonsterEncounter;
use crate::state::{GameOutcome, ScreenState};

/// Errors that abort an observation encode.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    #[error("card {0} has no encoding slot")]
    InvalidCardEncoding(CardId),
    #[error("encounter {0} is not a known final boss")]
    UnknownBossEncoding(MonsterEncounter),
}

/// Errors raised by the reward passthrough operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RewardError {
    #[error(
        "run is not offering card rewards (screen {screen:?}, outcome {outcome:?}); check that the run has not completed"
    )]
    InvalidRequestState {
        screen: ScreenState,
        outcome: GameOutcome,
    },
    #[error("card {0} is not part of the pending reward")]
    CardNotOffered(CardId),
}

/// Errors loading or decoding a state snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid bincode snapshot: {0}")]
    Decode(#[from] bincode::error::DecodeError),
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] bincode::error::EncodeError),
    #[error("invalid snapshot: {0}")]
    Invalid(&'static str),
}
