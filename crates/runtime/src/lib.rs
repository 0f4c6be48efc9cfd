//! Turn coordination runtime for the day-by-day roguelike session.
//!
//! This crate wires the pure turn rules from `game-core` to the outside world:
//! collaborators that build levels, move enemies and show banners, background
//! workers that pace the enemy pass and the level intro, and an event bus.
//! Hosts embed [`TurnCoordinator`] and drive it with
//! [`TurnCoordinator::tick`] once per frame.
//!
//! Modules are organized by responsibility:
//! - [`coordinator`] hosts the orchestrator and builder
//! - [`api`] exposes the collaborator traits and error types
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`session`] enforces one live session per process
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod coordinator;
pub mod events;
pub mod session;

mod workers;

pub use api::{
    Actor, ActorRegistry, CollaboratorError, CollaboratorKind, LevelBuilder, Presenter, Result,
    RuntimeError,
};
pub use coordinator::{RuntimeConfig, TurnCoordinator, TurnCoordinatorBuilder};
pub use events::{Event, EventBus, LevelEvent, SessionEvent, Topic, TurnEvent};
pub use session::is_session_live;

pub use game_core::{SessionState, TurnConfig, TurnError, TurnOperation, TurnPhase};
