//! Shared fixtures for coordinator tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use runtime::{
    Actor, ActorRegistry, CollaboratorError, Event, LevelBuilder, LevelEvent, Presenter,
    RuntimeConfig, TurnConfig, TurnCoordinator, TurnEvent,
};
use tokio::sync::broadcast;
use tokio::time::Instant;

pub const TURN_DELAY: Duration = Duration::from_millis(100);
pub const LEVEL_START_DELAY: Duration = Duration::from_secs(2);

/// Presenter that records every call.
#[derive(Default)]
pub struct RecordingPresenter {
    calls: Mutex<Vec<BannerCall>>,
    fail_show: bool,
    fail_hide: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BannerCall {
    Show(String),
    Hide,
}

impl RecordingPresenter {
    pub fn failing_show() -> Self {
        Self {
            fail_show: true,
            ..Self::default()
        }
    }

    pub fn failing_hide() -> Self {
        Self {
            fail_hide: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<BannerCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Presenter for RecordingPresenter {
    fn show_banner(&self, text: &str) -> Result<(), CollaboratorError> {
        self.calls
            .lock()
            .unwrap()
            .push(BannerCall::Show(text.to_string()));
        if self.fail_show {
            return Err("banner widget missing".into());
        }
        Ok(())
    }

    fn hide_banner(&self) -> Result<(), CollaboratorError> {
        self.calls.lock().unwrap().push(BannerCall::Hide);
        if self.fail_hide {
            return Err("banner widget missing".into());
        }
        Ok(())
    }
}

/// Log of actor moves with the virtual time they happened at.
pub type MoveLog = Arc<Mutex<Vec<(&'static str, Instant)>>>;

pub struct TestActor {
    name: &'static str,
    cost: Duration,
    fail: bool,
    log: MoveLog,
}

impl Actor for TestActor {
    fn move_self(&mut self) -> Result<(), CollaboratorError> {
        if self.fail {
            return Err(format!("{} is stuck", self.name).into());
        }
        self.log.lock().unwrap().push((self.name, Instant::now()));
        Ok(())
    }

    fn move_time_cost(&self) -> Duration {
        self.cost
    }
}

#[derive(Clone, Copy)]
pub struct ActorSpec {
    pub name: &'static str,
    pub cost: Duration,
    pub fail: bool,
}

impl ActorSpec {
    pub const fn new(name: &'static str, cost_ms: u64) -> Self {
        Self {
            name,
            cost: Duration::from_millis(cost_ms),
            fail: false,
        }
    }

    pub const fn failing(name: &'static str) -> Self {
        Self {
            name,
            cost: Duration::ZERO,
            fail: true,
        }
    }
}

/// Level builder that spawns a fixed roster per level and records what the
/// registry looked like when it was called.
#[derive(Default)]
pub struct ScriptedBuilder {
    rosters: HashMap<u32, Vec<ActorSpec>>,
    pub log: MoveLog,
    seen: Mutex<Vec<(u32, usize)>>,
    fail_on: Option<u32>,
}

impl ScriptedBuilder {
    pub fn with_level(mut self, level: u32, roster: Vec<ActorSpec>) -> Self {
        self.rosters.insert(level, roster);
        self
    }

    /// Registers the roster for `level`, then fails.
    pub fn failing_on(mut self, level: u32) -> Self {
        self.fail_on = Some(level);
        self
    }

    /// `(level, registry length on entry)` for every call.
    pub fn seen(&self) -> Vec<(u32, usize)> {
        self.seen.lock().unwrap().clone()
    }

    pub fn moves(&self) -> Vec<(&'static str, Instant)> {
        self.log.lock().unwrap().clone()
    }
}

impl LevelBuilder for ScriptedBuilder {
    fn setup_scene(
        &self,
        level: u32,
        actors: &mut ActorRegistry<'_>,
    ) -> Result<(), CollaboratorError> {
        self.seen.lock().unwrap().push((level, actors.len()));
        for spec in self.rosters.get(&level).into_iter().flatten() {
            actors.register(TestActor {
                name: spec.name,
                cost: spec.cost,
                fail: spec.fail,
                log: Arc::clone(&self.log),
            });
        }
        if self.fail_on == Some(level) {
            return Err(format!("no room left on level {level}").into());
        }
        Ok(())
    }
}

pub fn test_config() -> RuntimeConfig {
    RuntimeConfig {
        turn: TurnConfig::new()
            .with_level_start_delay(LEVEL_START_DELAY)
            .with_turn_delay(TURN_DELAY),
        event_buffer_size: 64,
    }
}

pub fn coordinator(
    builder: Arc<ScriptedBuilder>,
    presenter: Arc<RecordingPresenter>,
) -> TurnCoordinator {
    TurnCoordinator::builder()
        .config(test_config())
        .level_builder(builder)
        .presenter(presenter)
        .build()
        .expect("coordinator should build")
}

/// Waits for the next event matching `pred`, skipping others.
pub async fn wait_for(
    rx: &mut broadcast::Receiver<Event>,
    pred: impl Fn(&Event) -> bool,
) -> Event {
    loop {
        let event = rx.recv().await.expect("event bus closed");
        if pred(&event) {
            return event;
        }
    }
}

pub async fn wait_setup_finished(rx: &mut broadcast::Receiver<Event>, level: u32) {
    wait_for(rx, |e| {
        *e == Event::Level(LevelEvent::SetupFinished { level })
    })
    .await;
}

pub async fn wait_player_turn(rx: &mut broadcast::Receiver<Event>) {
    wait_for(rx, |e| {
        matches!(e, Event::Turn(TurnEvent::PlayerTurnStarted { .. }))
    })
    .await;
}
