//! Enemy pass worker.
//!
//! Interprets a [`game_core::EnemyPass`] plan: fixed waits are slept with
//! `tokio::time::sleep`, each actor moves while the session is locked, and
//! the actor's own move cost is slept before the next step. On completion the
//! turn goes back to the player.

use std::time::Duration;

use game_core::{EnemyPass, PassStep, TurnEngine};
use tracing::{debug, error, info};

use crate::api::RuntimeError;
use crate::events::{Event, EventBus, TurnEvent};
use crate::session::{SessionCell, SharedSession};

pub(crate) struct EnemyPassWorker {
    shared: SharedSession,
    event_bus: EventBus,
    pass: EnemyPass,
    level: u32,
}

impl EnemyPassWorker {
    pub(crate) fn new(
        shared: SharedSession,
        event_bus: EventBus,
        turn_delay: Duration,
        level: u32,
    ) -> Self {
        Self {
            shared,
            event_bus,
            pass: EnemyPass::new(turn_delay),
            level,
        }
    }

    /// Main worker loop.
    pub(crate) async fn run(mut self) {
        loop {
            let wait = {
                let mut cell = self.shared.lock().await;
                if cell.state.is_game_over() {
                    debug!("Enemy pass abandoned: game over");
                    return;
                }

                let actor_count = cell.actors.len();
                match self.pass.advance(actor_count) {
                    None => {
                        self.hand_back(&mut cell);
                        return;
                    }
                    Some(PassStep::Wait(delay)) => Some(delay),
                    Some(PassStep::Move { index }) => {
                        if !self.move_actor(&mut cell, index) {
                            return;
                        }
                        None
                    }
                    Some(PassStep::WaitForActor { index }) => cell
                        .actors
                        .get(index)
                        .map(|actor| actor.move_time_cost()),
                }
            };

            if let Some(delay) = wait {
                tokio::time::sleep(delay).await;
            }
        }
    }

    /// Moves one actor. Returns false when the pass must stop.
    fn move_actor(&self, cell: &mut SessionCell, index: usize) -> bool {
        let Some(actor) = cell.actors.get_mut(index) else {
            return true;
        };

        match actor.move_self() {
            Ok(()) => {
                let cost = actor.move_time_cost();
                debug!(day = self.level, index, ?cost, "Actor moved");
                self.event_bus.publish(Event::Turn(TurnEvent::ActorMoved {
                    level: self.level,
                    index,
                    cost,
                }));
                true
            }
            Err(source) => {
                error!(day = self.level, index, "Actor failed to move: {}", source);
                cell.record_fault(RuntimeError::Actor { index, source });
                self.hand_back(cell);
                false
            }
        }
    }

    fn hand_back(&self, cell: &mut SessionCell) {
        if TurnEngine::new(&mut cell.state).finish_enemy_pass() {
            info!(day = self.level, "Player turn");
            self.event_bus
                .publish(Event::Turn(TurnEvent::PlayerTurnStarted { level: self.level }));
        }
    }
}
