//! Collaborator seams the coordinator drives.
//!
//! Runtime users plug in a [`LevelBuilder`] to populate each day, [`Actor`]
//! handles for every enemy it creates, and a [`Presenter`] for the banner.
//! Implementations can be a real board, a terminal view, or test fixtures.
use std::time::Duration;

/// Error type returned by collaborator implementations.
///
/// The coordinator never inspects it; it is wrapped in a
/// [`crate::RuntimeError`] and handed back to the host.
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

/// A non-player entity that takes part in the enemy pass.
pub trait Actor: Send {
    /// Compute and apply this actor's move.
    ///
    /// Called while the session is locked, so no other actor moves at the
    /// same time.
    fn move_self(&mut self) -> Result<(), CollaboratorError>;

    /// Time the coordinator waits after this actor's move before the next one.
    fn move_time_cost(&self) -> Duration;
}

/// Populates a level and registers the enemies it creates.
pub trait LevelBuilder: Send + Sync {
    /// Build level `level`, registering each created actor with `actors`.
    ///
    /// The registry is empty when this is called. Registering nothing is valid.
    fn setup_scene(
        &self,
        level: u32,
        actors: &mut ActorRegistry<'_>,
    ) -> Result<(), CollaboratorError>;
}

/// Shows and hides the day banner.
pub trait Presenter: Send + Sync {
    fn show_banner(&self, text: &str) -> Result<(), CollaboratorError>;

    fn hide_banner(&self) -> Result<(), CollaboratorError>;
}

/// Registration handle passed to [`LevelBuilder::setup_scene`].
///
/// Actors are appended in call order, which is also the order they move in.
pub struct ActorRegistry<'a> {
    actors: &'a mut Vec<Box<dyn Actor>>,
}

impl<'a> ActorRegistry<'a> {
    pub(crate) fn new(actors: &'a mut Vec<Box<dyn Actor>>) -> Self {
        Self { actors }
    }

    pub fn register(&mut self, actor: impl Actor + 'static) {
        self.register_boxed(Box::new(actor));
    }

    pub fn register_boxed(&mut self, actor: Box<dyn Actor>) {
        self.actors.push(actor);
    }

    /// Number of actors registered on the level so far.
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}
