//! Worker tasks that back the coordinator.
//!
//! The enemy pass worker paces non-player moves, and the level intro worker
//! dismisses the day banner once the start delay has elapsed. Both share the
//! coordinator's session lock and never hold it across a sleep.

mod enemy_pass;
mod level_intro;

pub(crate) use enemy_pass::EnemyPassWorker;
pub(crate) use level_intro::LevelIntroWorker;
