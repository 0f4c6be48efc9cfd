//! Turn transitions over [`SessionState`].
//!
//! The [`TurnEngine`] is the authoritative reducer for session flags. Drivers
//! borrow it for the duration of one transition; a rejected transition returns
//! [`TurnError::InvalidTransition`] and leaves the state untouched.

use crate::error::{TurnError, TurnOperation};
use crate::state::{SessionState, TurnPhase};

pub struct TurnEngine<'a> {
    state: &'a mut SessionState,
}

impl<'a> TurnEngine<'a> {
    /// Creates a new turn engine over the given state.
    pub fn new(state: &'a mut SessionState) -> Self {
        Self { state }
    }

    fn reject(&self, operation: TurnOperation) -> TurnError {
        TurnError::invalid(operation, self.state.phase())
    }

    /// Enters level setup and returns the new level number.
    ///
    /// Rejected after game over and while an enemy pass is executing.
    pub fn begin_level(&mut self) -> Result<u32, TurnError> {
        if self.state.game_over || self.state.enemies_moving {
            return Err(self.reject(TurnOperation::BeginLevel));
        }

        self.state.started = true;
        self.state.setting_up = true;
        self.state.level += 1;
        Ok(self.state.level)
    }

    /// Leaves setup for `level`.
    ///
    /// Returns false without touching state when the game is over or another
    /// level has begun since the intro timer for `level` was armed.
    pub fn finish_setup(&mut self, level: u32) -> bool {
        if !self.state.is_setting_up_level(level) {
            return false;
        }

        self.state.setting_up = false;
        true
    }

    /// Checks that actors may still be registered.
    pub fn admit_actor(&self) -> Result<(), TurnError> {
        if self.state.game_over {
            return Err(self.reject(TurnOperation::RegisterActor));
        }
        Ok(())
    }

    /// Hands the turn to the enemies.
    pub fn end_player_turn(&mut self) -> Result<(), TurnError> {
        match self.state.phase() {
            TurnPhase::Setup | TurnPhase::PlayerTurn if self.state.players_turn => {
                self.state.players_turn = false;
                Ok(())
            }
            _ => Err(self.reject(TurnOperation::EndPlayerTurn)),
        }
    }

    /// Polls whether the enemy pass should start and marks it running if so.
    ///
    /// Returns `Ok(true)` when the caller must now run the pass, `Ok(false)` for
    /// a no-op tick, and an error when no level has begun.
    pub fn start_enemy_pass(&mut self) -> Result<bool, TurnError> {
        if self.state.game_over {
            return Ok(false);
        }
        if !self.state.started {
            return Err(self.reject(TurnOperation::Tick));
        }
        if !self.state.enemy_pass_due() {
            return Ok(false);
        }

        self.state.enemies_moving = true;
        Ok(true)
    }

    /// Returns the turn to the player at the end of a pass.
    ///
    /// Returns false when the game ended during the pass; the terminal state
    /// is left exactly as `declare_game_over` set it.
    pub fn finish_enemy_pass(&mut self) -> bool {
        if self.state.game_over {
            return false;
        }

        self.state.players_turn = true;
        self.state.enemies_moving = false;
        true
    }

    /// Enters the terminal state. Returns false if it was already entered.
    pub fn declare_game_over(&mut self) -> bool {
        if self.state.game_over {
            return false;
        }

        self.state.game_over = true;
        true
    }

    pub fn set_player_resource(&mut self, amount: i32) -> Result<(), TurnError> {
        if self.state.game_over {
            return Err(self.reject(TurnOperation::SetPlayerResource));
        }

        self.state.player_resource = amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_state() -> SessionState {
        let mut state = SessionState::default();
        let mut engine = TurnEngine::new(&mut state);
        let level = engine.begin_level().unwrap();
        assert!(engine.finish_setup(level));
        state
    }

    #[test]
    fn begin_level_increments_and_enters_setup() {
        let mut state = SessionState::default();
        assert_eq!(state.phase(), TurnPhase::Inactive);

        let level = TurnEngine::new(&mut state).begin_level().unwrap();

        assert_eq!(level, 1);
        assert_eq!(state.level(), 1);
        assert!(state.is_setting_up());
        assert!(state.is_players_turn());
        assert_eq!(state.phase(), TurnPhase::Setup);
    }

    #[test]
    fn tick_before_first_level_is_rejected() {
        let mut state = SessionState::default();
        let before = state.clone();

        let err = TurnEngine::new(&mut state).start_enemy_pass().unwrap_err();

        assert_eq!(
            err,
            TurnError::invalid(TurnOperation::Tick, TurnPhase::Inactive)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn tick_is_noop_while_player_enemies_or_setup_hold() {
        let mut state = SessionState::default();
        TurnEngine::new(&mut state).begin_level().unwrap();

        // setting_up
        let before = state.clone();
        assert!(!TurnEngine::new(&mut state).start_enemy_pass().unwrap());
        assert_eq!(state, before);

        // players_turn
        TurnEngine::new(&mut state).finish_setup(1);
        let before = state.clone();
        assert!(!TurnEngine::new(&mut state).start_enemy_pass().unwrap());
        assert_eq!(state, before);

        // enemies_moving
        TurnEngine::new(&mut state).end_player_turn().unwrap();
        assert!(TurnEngine::new(&mut state).start_enemy_pass().unwrap());
        let before = state.clone();
        for _ in 0..5 {
            assert!(!TurnEngine::new(&mut state).start_enemy_pass().unwrap());
        }
        assert_eq!(state, before);
    }

    #[test]
    fn full_turn_cycle_alternates() {
        let mut state = playing_state();
        let mut engine = TurnEngine::new(&mut state);

        engine.end_player_turn().unwrap();
        assert!(engine.start_enemy_pass().unwrap());
        assert!(engine.finish_enemy_pass());

        assert!(state.is_players_turn());
        assert!(!state.is_enemies_moving());
        assert_eq!(state.phase(), TurnPhase::PlayerTurn);
    }

    #[test]
    fn player_and_enemy_flags_never_overlap_once_pass_started() {
        let mut state = playing_state();
        TurnEngine::new(&mut state).end_player_turn().unwrap();
        TurnEngine::new(&mut state).start_enemy_pass().unwrap();

        assert!(state.is_enemies_moving());
        assert!(!state.is_players_turn());
    }

    #[test]
    fn end_player_turn_twice_is_rejected() {
        let mut state = playing_state();
        TurnEngine::new(&mut state).end_player_turn().unwrap();

        let err = TurnEngine::new(&mut state).end_player_turn().unwrap_err();

        assert_eq!(
            err,
            TurnError::invalid(TurnOperation::EndPlayerTurn, TurnPhase::EnemyTurnPending)
        );
    }

    #[test]
    fn begin_level_during_enemy_pass_is_rejected() {
        let mut state = playing_state();
        TurnEngine::new(&mut state).end_player_turn().unwrap();
        TurnEngine::new(&mut state).start_enemy_pass().unwrap();
        let before = state.clone();

        let err = TurnEngine::new(&mut state).begin_level().unwrap_err();

        assert_eq!(
            err,
            TurnError::invalid(TurnOperation::BeginLevel, TurnPhase::EnemyTurn)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn stale_intro_timer_does_not_finish_new_level() {
        let mut state = SessionState::default();
        TurnEngine::new(&mut state).begin_level().unwrap();
        TurnEngine::new(&mut state).begin_level().unwrap();

        assert!(!TurnEngine::new(&mut state).finish_setup(1));
        assert!(state.is_setting_up());
        assert!(TurnEngine::new(&mut state).finish_setup(2));
        assert!(!TurnEngine::new(&mut state).finish_setup(2));
    }

    #[test]
    fn game_over_is_terminal() {
        let mut state = playing_state();
        assert!(TurnEngine::new(&mut state).declare_game_over());
        let before = state.clone();

        let mut engine = TurnEngine::new(&mut state);
        assert!(!engine.start_enemy_pass().unwrap());
        assert!(engine.begin_level().is_err());
        assert!(engine.end_player_turn().is_err());
        assert!(engine.admit_actor().is_err());
        assert!(engine.set_player_resource(5).is_err());
        assert!(!engine.finish_enemy_pass());
        assert!(!engine.finish_setup(1));
        assert!(!engine.declare_game_over());

        assert_eq!(state, before);
        assert_eq!(state.phase(), TurnPhase::GameOver);
    }

    #[test]
    fn player_resource_defaults_from_config_and_updates() {
        let mut state = SessionState::default();
        assert_eq!(state.player_resource(), 100);

        TurnEngine::new(&mut state).set_player_resource(42).unwrap();

        assert_eq!(state.player_resource(), 42);
    }
}
