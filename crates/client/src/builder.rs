//! Client builder with dependency injection pattern.
use std::sync::Arc;

use anyhow::{Context, Result};
use runtime::{Presenter, TurnCoordinator};

use crate::board::{Board, BoardBuilder};
use crate::config::ClientConfig;
use crate::player::ScriptedPlayer;
use crate::presenter::ConsolePresenter;
use crate::Client;

/// Builder for constructing a [`Client`].
///
/// Configuration is required. The presenter defaults to a stdout console.
#[derive(Default)]
pub struct ClientBuilder {
    config: Option<ClientConfig>,
    presenter: Option<Arc<dyn Presenter>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replace the console presenter, e.g. with an in-memory one for tests.
    pub fn presenter(mut self, presenter: Arc<dyn Presenter>) -> Self {
        self.presenter = Some(presenter);
        self
    }

    /// Lays out the board and claims the process-wide turn session.
    ///
    /// # Errors
    ///
    /// Returns an error if no configuration was given or another session is
    /// already live.
    pub fn build(self) -> Result<Client> {
        let config = self
            .config
            .context("Client config is required. Use .config() to set it.")?;
        let presenter = self
            .presenter
            .unwrap_or_else(|| Arc::new(ConsolePresenter::stdout()));

        let board = Board::new(config.board.size, config.runtime.turn.starting_resource);
        let level_builder =
            BoardBuilder::new(board.clone(), config.board.clone(), config.rng_seed);

        let coordinator = TurnCoordinator::builder()
            .config(config.runtime.clone())
            .level_builder(Arc::new(level_builder))
            .presenter(presenter)
            .build()
            .context("Failed to build turn coordinator")?;

        let player = ScriptedPlayer::new(board.clone(), config.board.food_per_move);

        Ok(Client {
            coordinator,
            board,
            player,
            frame_interval: config.frame_interval,
            max_levels: config.max_levels,
        })
    }
}
