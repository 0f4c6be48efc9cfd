//! Scripted player that walks toward the exit.
use tracing::trace;

use crate::board::{Board, BoardState, Position};

/// What happened on the player's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerOutcome {
    Moved(Position),
    /// No free neighbour; the turn is spent standing still.
    Waited,
    ReachedExit,
    Starved,
}

pub struct ScriptedPlayer {
    board: Board,
    food_per_move: i32,
}

impl ScriptedPlayer {
    pub fn new(board: Board, food_per_move: i32) -> Self {
        Self {
            board,
            food_per_move,
        }
    }

    /// Takes one step, spending food and collecting any pickup on arrival.
    ///
    /// A player already at zero food starves without moving, which covers
    /// food lost to enemy attacks during the previous pass.
    pub fn take_turn(&self) -> PlayerOutcome {
        let food_per_move = self.food_per_move;
        self.board.with_state(|s| {
            if s.food <= 0 {
                return PlayerOutcome::Starved;
            }

            s.food -= food_per_move;
            let outcome = match next_step(s) {
                Some(next) => {
                    s.player = next;
                    if let Some(value) = s.pickups.remove(&next) {
                        s.food += value;
                        trace!(value, food = s.food, "Picked up food");
                    }
                    PlayerOutcome::Moved(next)
                }
                None => PlayerOutcome::Waited,
            };

            if s.player == s.exit {
                PlayerOutcome::ReachedExit
            } else if s.food <= 0 {
                PlayerOutcome::Starved
            } else {
                outcome
            }
        })
    }
}

/// Greedy step: close the larger gap first, then the smaller, then sidestep.
fn next_step(s: &BoardState) -> Option<Position> {
    let dx = (s.exit.x - s.player.x).signum();
    let dy = (s.exit.y - s.player.y).signum();
    let along_x = s.player.offset(dx, 0);
    let along_y = s.player.offset(0, dy);

    let mut candidates = Vec::with_capacity(4);
    if (s.exit.x - s.player.x).abs() >= (s.exit.y - s.player.y).abs() {
        candidates.extend([along_x, along_y]);
    } else {
        candidates.extend([along_y, along_x]);
    }
    // Sidesteps that do not walk away from the exit.
    candidates.extend([s.player.offset(0, 1), s.player.offset(1, 0)]);

    candidates
        .into_iter()
        .filter(|&pos| pos != s.player)
        .find(|&pos| s.in_bounds(pos) && !s.has_enemy(pos))
}
