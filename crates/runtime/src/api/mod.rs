//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! other layers can stay focused on orchestration and workers.

pub mod collaborators;
pub mod errors;

pub use collaborators::{Actor, ActorRegistry, CollaboratorError, LevelBuilder, Presenter};
pub use errors::{CollaboratorKind, Result, RuntimeError};
