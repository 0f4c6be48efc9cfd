use crate::config::TurnConfig;

use super::TurnPhase;

/// Process-wide session data: the current day, the player's food and the
/// turn flags.
///
/// Fields are read-only outside this crate. Every mutation goes through
/// [`crate::TurnEngine`], which checks the transition against the current
/// [`TurnPhase`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    pub(crate) level: u32,
    pub(crate) player_resource: i32,
    pub(crate) players_turn: bool,
    pub(crate) enemies_moving: bool,
    pub(crate) setting_up: bool,
    pub(crate) game_over: bool,
    pub(crate) started: bool,
}

impl SessionState {
    /// Creates a fresh session at level 0 with the player to move.
    pub fn new(config: &TurnConfig) -> Self {
        Self {
            level: 0,
            player_resource: config.starting_resource,
            players_turn: true,
            enemies_moving: false,
            setting_up: false,
            game_over: false,
            started: false,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn player_resource(&self) -> i32 {
        self.player_resource
    }

    pub fn is_players_turn(&self) -> bool {
        self.players_turn
    }

    pub fn is_enemies_moving(&self) -> bool {
        self.enemies_moving
    }

    pub fn is_setting_up(&self) -> bool {
        self.setting_up
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Returns true while the intro of `level` is still pending and the game
    /// is running.
    pub fn is_setting_up_level(&self, level: u32) -> bool {
        !self.game_over && self.setting_up && self.level == level
    }

    /// Derives the current phase from the flags.
    pub fn phase(&self) -> TurnPhase {
        if self.game_over {
            TurnPhase::GameOver
        } else if !self.started {
            TurnPhase::Inactive
        } else if self.setting_up {
            TurnPhase::Setup
        } else if self.enemies_moving {
            TurnPhase::EnemyTurn
        } else if self.players_turn {
            TurnPhase::PlayerTurn
        } else {
            TurnPhase::EnemyTurnPending
        }
    }

    /// Returns true when a tick should start the enemy pass.
    pub fn enemy_pass_due(&self) -> bool {
        self.started
            && !self.game_over
            && !(self.players_turn || self.enemies_moving || self.setting_up)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(&TurnConfig::default())
    }
}
