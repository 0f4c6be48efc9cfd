//! Host driver for the scavenger demo.
//!
//! The client owns a [`TurnCoordinator`] and plays the role of the frame loop:
//! it ticks the coordinator at a fixed interval and, whenever it is the
//! player's turn, lets a [`ScriptedPlayer`] walk the board. Reaching the exit
//! starts the next day; running out of food ends the session.
pub mod board;
pub mod config;
pub mod logging;
pub mod player;
pub mod presenter;

mod builder;

pub use builder::ClientBuilder;
pub use config::{BoardConfig, ClientConfig};

use std::time::Duration;

use anyhow::{Context, Result};
use runtime::{TurnCoordinator, TurnPhase};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::board::Board;
use crate::player::{PlayerOutcome, ScriptedPlayer};

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Last day reached.
    pub days: u32,
    /// Food left when the run ended.
    pub food: i32,
    pub starved: bool,
}

pub struct Client {
    coordinator: TurnCoordinator,
    board: Board,
    player: ScriptedPlayer,
    frame_interval: Duration,
    max_levels: Option<u32>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Plays until the player starves or survives `max_levels` days.
    ///
    /// # Errors
    ///
    /// Returns an error if a collaborator fails or the coordinator rejects a
    /// transition. The session is released either way.
    pub async fn run(mut self) -> Result<RunSummary> {
        let mut frames = tokio::time::interval(self.frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let day = self
            .coordinator
            .begin_level()
            .await
            .context("Failed to start the first day")?;
        info!(day, "Session started");

        let starved = loop {
            frames.tick().await;
            self.coordinator
                .tick()
                .await
                .context("Turn coordinator failed")?;
            // Enemy hits land on the board during the pass.
            self.sync_food().await?;

            if self.coordinator.phase().await != TurnPhase::PlayerTurn {
                continue;
            }

            let outcome = self.player.take_turn();
            self.sync_food().await?;

            match outcome {
                PlayerOutcome::Moved(_) | PlayerOutcome::Waited => {
                    debug!(?outcome, food = self.board.food(), "Player turn");
                    self.coordinator.end_player_turn().await?;
                }
                PlayerOutcome::ReachedExit => {
                    let day = self.coordinator.level().await;
                    info!(day, food = self.board.food(), "Reached the exit");
                    if self.max_levels.is_some_and(|max| day >= max) {
                        break false;
                    }
                    self.coordinator
                        .begin_level()
                        .await
                        .with_context(|| format!("Failed to start day {}", day + 1))?;
                }
                PlayerOutcome::Starved => {
                    self.coordinator.declare_game_over().await?;
                    break true;
                }
            }
        };

        let summary = RunSummary {
            days: self.coordinator.level().await,
            food: self.board.food(),
            starved,
        };
        info!(
            days = summary.days,
            food = summary.food,
            starved = summary.starved,
            "Session finished"
        );

        self.coordinator.shutdown().await?;
        Ok(summary)
    }

    /// Pushes the board's food total into the session if it changed.
    async fn sync_food(&self) -> Result<()> {
        let food = self.board.food();
        if self.coordinator.player_resource().await != food {
            self.coordinator.set_player_resource(food).await?;
        }
        Ok(())
    }
}
