//! Event types for different topics.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Events related to level setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelEvent {
    /// A level was built and its intro banner is showing
    Started { level: u32, actor_count: usize },

    /// The intro banner was hidden and the level is playable
    SetupFinished { level: u32 },
}

/// Events related to turn hand-offs and the enemy pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// The player ended their turn and the enemy pass began
    EnemyTurnStarted { level: u32, actor_count: usize },

    /// One actor finished its move; the pass now waits `cost`
    ActorMoved {
        level: u32,
        index: usize,
        cost: Duration,
    },

    /// The enemy pass finished and the player may act again
    PlayerTurnStarted { level: u32 },
}

/// Events related to the session lifetime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Terminal state entered
    GameOver { level: u32, player_resource: i32 },
}
