//! One-shot timer that ends level setup.

use std::sync::Arc;
use std::time::Duration;

use game_core::TurnEngine;
use tracing::{debug, error, info};

use crate::api::{Presenter, RuntimeError};
use crate::events::{Event, EventBus, LevelEvent};
use crate::session::SharedSession;

pub(crate) struct LevelIntroWorker {
    shared: SharedSession,
    presenter: Arc<dyn Presenter>,
    event_bus: EventBus,
    level: u32,
    delay: Duration,
}

impl LevelIntroWorker {
    pub(crate) fn new(
        shared: SharedSession,
        presenter: Arc<dyn Presenter>,
        event_bus: EventBus,
        level: u32,
        delay: Duration,
    ) -> Self {
        Self {
            shared,
            presenter,
            event_bus,
            level,
            delay,
        }
    }

    /// Sleeps for the start delay, then hides the banner and ends setup.
    ///
    /// Does nothing if another level began or the game ended meanwhile.
    pub(crate) async fn run(self) {
        tokio::time::sleep(self.delay).await;

        let mut cell = self.shared.lock().await;
        if !cell.state.is_setting_up_level(self.level) {
            debug!(day = self.level, "Stale level intro timer ignored");
            return;
        }

        if let Err(source) = self.presenter.hide_banner() {
            error!(day = self.level, "Failed to hide level banner: {}", source);
            cell.record_fault(RuntimeError::Presenter { source });
        }

        TurnEngine::new(&mut cell.state).finish_setup(self.level);
        info!(day = self.level, "Level setup finished");
        self.event_bus
            .publish(Event::Level(LevelEvent::SetupFinished { level: self.level }));
    }
}
