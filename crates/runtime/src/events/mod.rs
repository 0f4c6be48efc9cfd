//! Topic-based event bus for runtime events.
//!
//! The coordinator publishes level, turn and session events to separate
//! topics, and consumers subscribe only to the topics they need.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{LevelEvent, SessionEvent, TurnEvent};
