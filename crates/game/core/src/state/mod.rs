//! Session state and the phase view derived from it.
//!
//! [`SessionState`] is the canonical record of a running game. It is cloned
//! freely for snapshots; only [`crate::TurnEngine`] mutates it.
mod session;
mod turn;

pub use session::SessionState;
pub use turn::TurnPhase;
