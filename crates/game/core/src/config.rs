//! Session timing constants and tunable parameters.
use std::time::Duration;

/// Turn pacing configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnConfig {
    /// How long the "Day N" banner stays up before the level becomes playable.
    pub level_start_delay: Duration,
    /// Spacing inserted at the start of every enemy pass.
    pub turn_delay: Duration,
    /// Player resource (food) a fresh session starts with.
    pub starting_resource: i32,
}

impl TurnConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_LEVEL_START_DELAY: Duration = Duration::from_secs(2);
    pub const DEFAULT_TURN_DELAY: Duration = Duration::from_millis(100);
    pub const DEFAULT_STARTING_RESOURCE: i32 = 100;

    pub const fn new() -> Self {
        Self {
            level_start_delay: Self::DEFAULT_LEVEL_START_DELAY,
            turn_delay: Self::DEFAULT_TURN_DELAY,
            starting_resource: Self::DEFAULT_STARTING_RESOURCE,
        }
    }

    pub const fn with_level_start_delay(mut self, delay: Duration) -> Self {
        self.level_start_delay = delay;
        self
    }

    pub const fn with_turn_delay(mut self, delay: Duration) -> Self {
        self.turn_delay = delay;
        self
    }

    pub const fn with_starting_resource(mut self, amount: i32) -> Self {
        self.starting_resource = amount;
        self
    }
}

impl Default for TurnConfig {
    fn default() -> Self {
        Self::new()
    }
}
