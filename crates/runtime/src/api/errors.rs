//! Unified error types surfaced by the runtime API.
//!
//! Wraps rejected turn transitions, collaborator failures and worker
//! coordination failures so hosts can bubble them up with consistent context.
use std::fmt;

use thiserror::Error;

use game_core::TurnError;

use super::collaborators::CollaboratorError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Turn(#[from] TurnError),

    #[error("{kind} collaborator not set")]
    CollaboratorNotSet { kind: CollaboratorKind },

    #[error("level builder failed to set up level {level}")]
    LevelBuilder {
        level: u32,
        #[source]
        source: CollaboratorError,
    },

    #[error("presenter failed")]
    Presenter {
        #[source]
        source: CollaboratorError,
    },

    #[error("actor #{index} failed to move")]
    Actor {
        index: usize,
        #[source]
        source: CollaboratorError,
    },

    #[error("runtime worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}

impl RuntimeError {
    /// Returns the rejected transition error, if this is one.
    pub fn as_turn_error(&self) -> Option<&TurnError> {
        match self {
            RuntimeError::Turn(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CollaboratorKind {
    LevelBuilder,
    Presenter,
}

impl fmt::Display for CollaboratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CollaboratorKind::LevelBuilder => "level builder",
            CollaboratorKind::Presenter => "presenter",
        };
        write!(f, "{}", label)
    }
}
