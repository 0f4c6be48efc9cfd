//! Step plan for the enemy pass.
//!
//! The pass is a resumable sequence: the driver asks for the next step, performs
//! it (sleeping, or moving one actor), and asks again. Ordering lives here so the
//! async runtime and any frame-driven driver share one definition:
//!
//! 1. wait `turn_delay`
//! 2. if no actors are registered, wait `turn_delay` again
//! 3. for each actor in registration order: move it, then wait its own cost
//!
//! The actor count is re-read on every step, so an actor registered while the
//! pass is suspended is still visited in order.
use std::time::Duration;

/// One unit of work for the driver of an enemy pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassStep {
    /// Suspend for a fixed duration.
    Wait(Duration),
    /// Call `move_self` on the actor at `index`.
    Move { index: usize },
    /// Suspend for the move time cost reported by the actor at `index`.
    WaitForActor { index: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cursor {
    Opening,
    Padding,
    Move(usize),
    Settle(usize),
    Done,
}

/// Resumable enemy pass plan.
#[derive(Clone, Debug)]
pub struct EnemyPass {
    turn_delay: Duration,
    cursor: Cursor,
}

impl EnemyPass {
    pub fn new(turn_delay: Duration) -> Self {
        Self {
            turn_delay,
            cursor: Cursor::Opening,
        }
    }

    /// Returns the next step given the number of actors currently registered,
    /// or `None` once the pass is complete.
    pub fn advance(&mut self, actor_count: usize) -> Option<PassStep> {
        let (step, next) = match self.cursor {
            Cursor::Opening => (Some(PassStep::Wait(self.turn_delay)), Cursor::Padding),
            Cursor::Padding if actor_count == 0 => {
                (Some(PassStep::Wait(self.turn_delay)), Cursor::Done)
            }
            Cursor::Padding => return self.step_to(Cursor::Move(0), actor_count),
            Cursor::Move(index) if index < actor_count => {
                (Some(PassStep::Move { index }), Cursor::Settle(index))
            }
            Cursor::Move(_) => (None, Cursor::Done),
            Cursor::Settle(index) => (
                Some(PassStep::WaitForActor { index }),
                Cursor::Move(index + 1),
            ),
            Cursor::Done => (None, Cursor::Done),
        };

        self.cursor = next;
        step
    }

    fn step_to(&mut self, cursor: Cursor, actor_count: usize) -> Option<PassStep> {
        self.cursor = cursor;
        self.advance(actor_count)
    }

    /// Returns true once `advance` has returned `None`.
    pub fn is_done(&self) -> bool {
        self.cursor == Cursor::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(100);

    fn drain(pass: &mut EnemyPass, actor_count: usize) -> Vec<PassStep> {
        std::iter::from_fn(|| pass.advance(actor_count)).collect()
    }

    #[test]
    fn empty_level_waits_twice() {
        let mut pass = EnemyPass::new(DELAY);

        let steps = drain(&mut pass, 0);

        assert_eq!(steps, vec![PassStep::Wait(DELAY), PassStep::Wait(DELAY)]);
        assert!(pass.is_done());
    }

    #[test]
    fn actors_move_in_registration_order_with_settle_waits() {
        let mut pass = EnemyPass::new(DELAY);

        let steps = drain(&mut pass, 2);

        assert_eq!(
            steps,
            vec![
                PassStep::Wait(DELAY),
                PassStep::Move { index: 0 },
                PassStep::WaitForActor { index: 0 },
                PassStep::Move { index: 1 },
                PassStep::WaitForActor { index: 1 },
            ]
        );
    }

    #[test]
    fn actor_registered_mid_pass_is_visited() {
        let mut pass = EnemyPass::new(DELAY);

        assert_eq!(pass.advance(1), Some(PassStep::Wait(DELAY)));
        assert_eq!(pass.advance(1), Some(PassStep::Move { index: 0 }));
        assert_eq!(pass.advance(1), Some(PassStep::WaitForActor { index: 0 }));
        assert_eq!(pass.advance(2), Some(PassStep::Move { index: 1 }));
        assert_eq!(pass.advance(2), Some(PassStep::WaitForActor { index: 1 }));
        assert_eq!(pass.advance(2), None);
    }

    #[test]
    fn finished_pass_stays_finished() {
        let mut pass = EnemyPass::new(DELAY);
        drain(&mut pass, 0);

        assert_eq!(pass.advance(3), None);
    }
}
