//! Deterministic turn rules shared by the runtime and the client.
//!
//! `game-core` defines the canonical session state of a single-player
//! roguelike day cycle and exposes pure APIs for advancing it. All turn-flag
//! mutation flows through [`engine::TurnEngine`], and the non-player movement
//! sequence is described by [`pass::EnemyPass`] so that any driver (async task,
//! frame loop, test harness) executes the exact same ordering.
pub mod banner;
pub mod config;
pub mod engine;
pub mod error;
pub mod pass;
pub mod state;

pub use banner::{day_banner, starvation_banner};
pub use config::TurnConfig;
pub use engine::TurnEngine;
pub use error::{TurnError, TurnOperation};
pub use pass::{EnemyPass, PassStep};
pub use state::{SessionState, TurnPhase};
