//! High-level turn coordinator.
//!
//! The coordinator owns the session, wires up the event bus, spawns the pacing
//! workers and exposes a builder-based API for host drivers.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard, broadcast};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use game_core::{SessionState, TurnConfig, TurnEngine, TurnPhase, day_banner, starvation_banner};

use crate::api::{
    Actor, ActorRegistry, CollaboratorKind, LevelBuilder, Presenter, Result, RuntimeError,
};
use crate::events::{Event, EventBus, LevelEvent, SessionEvent, Topic, TurnEvent};
use crate::session::{SessionCell, SessionGuard, SharedSession};
use crate::workers::{EnemyPassWorker, LevelIntroWorker};

/// Runtime configuration shared across the coordinator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub turn: TurnConfig,
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            turn: TurnConfig::default(),
            event_buffer_size: 100,
        }
    }
}

/// Authoritative owner of the turn session.
///
/// Design: the host driver owns exactly one coordinator and calls
/// [`tick`](Self::tick) once per frame. The enemy pass and the level intro run
/// as background tasks that share the session lock with the coordinator.
pub struct TurnCoordinator {
    config: RuntimeConfig,
    shared: SharedSession,
    level_builder: Arc<dyn LevelBuilder>,
    presenter: Arc<dyn Presenter>,
    event_bus: EventBus,

    // Background workers
    pass_worker: Option<JoinHandle<()>>,
    intro_worker: Option<JoinHandle<()>>,

    _guard: SessionGuard,
}

impl TurnCoordinator {
    /// Create a new coordinator builder
    pub fn builder() -> TurnCoordinatorBuilder {
        TurnCoordinatorBuilder::new()
    }

    async fn cell(&self) -> MutexGuard<'_, SessionCell> {
        self.shared.lock().await
    }

    /// Start the next level.
    ///
    /// Clears the registered actors, shows the "Day N" banner, lets the level
    /// builder populate the level and arms the intro timer that ends setup
    /// after `level_start_delay`. Returns the new level number.
    pub async fn begin_level(&mut self) -> Result<u32> {
        let shared = Arc::clone(&self.shared);
        let mut cell = shared.lock().await;

        let level = TurnEngine::new(&mut cell.state)
            .begin_level()
            .inspect_err(|e| warn!("Level transition rejected: {}", e))?;
        cell.actors.clear();
        info!(day = level, "Level setup started");

        self.arm_intro(level);

        self.presenter
            .show_banner(&day_banner(level))
            .map_err(|source| RuntimeError::Presenter { source })?;

        self.level_builder
            .setup_scene(level, &mut ActorRegistry::new(&mut cell.actors))
            .map_err(|source| RuntimeError::LevelBuilder { level, source })?;

        let actor_count = cell.actors.len();
        debug!(day = level, actor_count, "Level populated");
        self.event_bus
            .publish(Event::Level(LevelEvent::Started { level, actor_count }));

        Ok(level)
    }

    fn arm_intro(&mut self, level: u32) {
        if let Some(previous) = self.intro_worker.take() {
            previous.abort();
        }

        let worker = LevelIntroWorker::new(
            Arc::clone(&self.shared),
            Arc::clone(&self.presenter),
            self.event_bus.clone(),
            level,
            self.config.turn.level_start_delay,
        );
        self.intro_worker = Some(tokio::spawn(worker.run()));
    }

    /// Register an actor on the current level.
    ///
    /// Actors move in registration order. Rejected once the game is over.
    pub async fn register_actor(&self, actor: impl Actor + 'static) -> Result<()> {
        let mut cell = self.cell().await;
        TurnEngine::new(&mut cell.state).admit_actor()?;
        cell.actors.push(Box::new(actor));
        debug!(actor_count = cell.actors.len(), "Actor registered");
        Ok(())
    }

    /// Scheduling heartbeat, called once per host cycle.
    ///
    /// Does nothing once the game is over. Otherwise returns a collaborator
    /// failure raised by a background worker since the previous tick, if any,
    /// or starts the enemy pass when the player has ended their turn and
    /// neither setup nor a previous pass is running.
    pub async fn tick(&mut self) -> Result<()> {
        let mut cell = self.cell().await;
        if cell.state.is_game_over() {
            return Ok(());
        }
        if let Some(fault) = cell.fault.take() {
            return Err(fault);
        }

        if !TurnEngine::new(&mut cell.state).start_enemy_pass()? {
            return Ok(());
        }

        let level = cell.state.level();
        let actor_count = cell.actors.len();
        drop(cell);

        info!(day = level, actor_count, "Enemy turn");
        self.event_bus
            .publish(Event::Turn(TurnEvent::EnemyTurnStarted { level, actor_count }));

        let worker = EnemyPassWorker::new(
            Arc::clone(&self.shared),
            self.event_bus.clone(),
            self.config.turn.turn_delay,
            level,
        );
        self.pass_worker = Some(tokio::spawn(worker.run()));
        Ok(())
    }

    /// Hand the turn to the enemies; the next tick starts their pass.
    pub async fn end_player_turn(&self) -> Result<()> {
        let mut cell = self.cell().await;
        TurnEngine::new(&mut cell.state).end_player_turn()?;
        debug!(day = cell.state.level(), "Player ended turn");
        Ok(())
    }

    /// Enter the terminal state and show the starvation banner.
    ///
    /// A pass in flight is stopped where it is and an unreported worker fault
    /// is discarded. Calling this again is a no-op.
    pub async fn declare_game_over(&mut self) -> Result<()> {
        let mut cell = self.shared.lock().await;
        if cell.state.is_game_over() {
            debug!("Game over already declared");
            return Ok(());
        }

        let level = cell.state.level();
        let shown = self.presenter.show_banner(&starvation_banner(level));
        TurnEngine::new(&mut cell.state).declare_game_over();
        if let Some(fault) = cell.fault.take() {
            warn!(day = level, "Discarding unreported fault at game over: {}", fault);
        }

        for worker in [self.pass_worker.take(), self.intro_worker.take()]
            .into_iter()
            .flatten()
        {
            worker.abort();
        }

        let player_resource = cell.state.player_resource();
        info!(day = level, player_resource, "Game over");
        self.event_bus.publish(Event::Session(SessionEvent::GameOver {
            level,
            player_resource,
        }));

        shown.map_err(|source| RuntimeError::Presenter { source })
    }

    /// Store the player's resource total so it carries across levels.
    pub async fn set_player_resource(&self, amount: i32) -> Result<()> {
        let mut cell = self.cell().await;
        TurnEngine::new(&mut cell.state).set_player_resource(amount)?;
        Ok(())
    }

    pub async fn level(&self) -> u32 {
        self.cell().await.state.level()
    }

    pub async fn player_resource(&self) -> i32 {
        self.cell().await.state.player_resource()
    }

    pub async fn is_game_over(&self) -> bool {
        self.cell().await.state.is_game_over()
    }

    pub async fn phase(&self) -> TurnPhase {
        self.cell().await.state.phase()
    }

    /// Number of actors registered on the current level.
    pub async fn actor_count(&self) -> usize {
        self.cell().await.actors.len()
    }

    /// Query the current session state (read-only snapshot)
    pub async fn snapshot(&self) -> SessionState {
        self.cell().await.state.clone()
    }

    /// Subscribe to events from a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Stop background workers and release the session.
    pub async fn shutdown(mut self) -> Result<()> {
        for worker in [self.pass_worker.take(), self.intro_worker.take()]
            .into_iter()
            .flatten()
        {
            worker.abort();
            match worker.await {
                Ok(()) => {}
                Err(e) if e.is_cancelled() => {}
                Err(e) => return Err(RuntimeError::WorkerJoin(e)),
            }
        }

        info!("Turn coordinator shut down");
        Ok(())
    }
}

impl Drop for TurnCoordinator {
    fn drop(&mut self) {
        for worker in [self.pass_worker.take(), self.intro_worker.take()]
            .into_iter()
            .flatten()
        {
            worker.abort();
        }
    }
}

/// Builder for [`TurnCoordinator`].
pub struct TurnCoordinatorBuilder {
    config: RuntimeConfig,
    level_builder: Option<Arc<dyn LevelBuilder>>,
    presenter: Option<Arc<dyn Presenter>>,
}

impl TurnCoordinatorBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            level_builder: None,
            presenter: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override turn pacing only
    pub fn turn_config(mut self, turn: TurnConfig) -> Self {
        self.config.turn = turn;
        self
    }

    /// Set required level builder. The host may keep its own handle.
    pub fn level_builder(mut self, builder: Arc<dyn LevelBuilder>) -> Self {
        self.level_builder = Some(builder);
        self
    }

    /// Set required presenter. The host may keep its own handle.
    pub fn presenter(mut self, presenter: Arc<dyn Presenter>) -> Self {
        self.presenter = Some(presenter);
        self
    }

    /// Build the coordinator and take the process-wide session.
    ///
    /// Fails with [`game_core::TurnError::AlreadyInitialized`] if another
    /// coordinator is still alive.
    pub fn build(self) -> Result<TurnCoordinator> {
        let level_builder = self
            .level_builder
            .ok_or(RuntimeError::CollaboratorNotSet {
                kind: CollaboratorKind::LevelBuilder,
            })?;
        let presenter = self.presenter.ok_or(RuntimeError::CollaboratorNotSet {
            kind: CollaboratorKind::Presenter,
        })?;

        let guard = SessionGuard::acquire().inspect_err(|e| warn!("{}", e))?;

        let state = SessionState::new(&self.config.turn);
        info!(
            "TurnCoordinator initialized: level_start_delay={:?}, turn_delay={:?}, resource={}",
            self.config.turn.level_start_delay,
            self.config.turn.turn_delay,
            state.player_resource()
        );

        Ok(TurnCoordinator {
            event_bus: EventBus::with_capacity(self.config.event_buffer_size),
            shared: Arc::new(Mutex::new(SessionCell::new(state))),
            level_builder,
            presenter,
            config: self.config,
            pass_worker: None,
            intro_worker: None,
            _guard: guard,
        })
    }
}
