//! Process-wide session ownership.
//!
//! Only one [`crate::TurnCoordinator`] may be alive per process. The guard is
//! taken when the coordinator is built and released when it is dropped, so a
//! second build fails with [`TurnError::AlreadyInitialized`] instead of
//! silently running a competing session.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;

use game_core::{SessionState, TurnError};

use crate::api::{Actor, RuntimeError};

static SESSION_LIVE: AtomicBool = AtomicBool::new(false);

/// Returns true while a coordinator holds the session.
pub fn is_session_live() -> bool {
    SESSION_LIVE.load(Ordering::Acquire)
}

pub(crate) struct SessionGuard {
    _private: (),
}

impl SessionGuard {
    pub(crate) fn acquire() -> Result<Self, TurnError> {
        SESSION_LIVE
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| Self { _private: () })
            .map_err(|_| TurnError::AlreadyInitialized)
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        SESSION_LIVE.store(false, Ordering::Release);
    }
}

/// Everything the coordinator and its workers mutate, behind one lock.
pub(crate) struct SessionCell {
    pub(crate) state: SessionState,
    pub(crate) actors: Vec<Box<dyn Actor>>,
    /// Collaborator failure raised by a worker, returned by the next tick.
    pub(crate) fault: Option<RuntimeError>,
}

impl SessionCell {
    pub(crate) fn new(state: SessionState) -> Self {
        Self {
            state,
            actors: Vec::new(),
            fault: None,
        }
    }

    pub(crate) fn record_fault(&mut self, fault: RuntimeError) {
        if self.fault.is_some() {
            tracing::warn!("Earlier fault still unreported, dropping: {}", fault);
            return;
        }
        self.fault = Some(fault);
    }
}

pub(crate) type SharedSession = Arc<Mutex<SessionCell>>;
