//! Errors raised by turn transitions.
//!
//! Collaborator failures (level builders, actors, presenters) are not part of
//! this crate; the runtime wraps them next to [`TurnError`].

use crate::state::TurnPhase;

/// Transition requested by a driver, used to label rejected requests.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TurnOperation {
    BeginLevel,
    RegisterActor,
    Tick,
    EndPlayerTurn,
    SetPlayerResource,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    /// A second session was constructed while one is still alive.
    #[error("a turn session is already live in this process")]
    AlreadyInitialized,

    /// The operation is not legal in the current phase. State is unchanged.
    #[error("{operation} is not allowed during {phase}")]
    InvalidTransition {
        operation: TurnOperation,
        phase: TurnPhase,
    },
}

impl TurnError {
    pub const fn invalid(operation: TurnOperation, phase: TurnPhase) -> Self {
        Self::InvalidTransition { operation, phase }
    }
}
