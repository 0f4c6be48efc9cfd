//! Demo board: a square grid with an exit, food pickups and wandering enemies.
//!
//! The board is shared between the level builder, every enemy it registers
//! and the scripted player. Enemies act as [`runtime::Actor`]s; the builder is
//! the [`runtime::LevelBuilder`].
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use runtime::{Actor, ActorRegistry, CollaboratorError, LevelBuilder};
use tracing::{debug, trace};

use crate::config::BoardConfig;

/// Food restored by a pickup.
pub const FOOD_PICKUP: i32 = 10;
pub const SODA_PICKUP: i32 = 20;
/// Food an enemy takes from the player per hit.
pub const ENEMY_DAMAGE: [i32; 2] = [10, 20];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Result of one enemy move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyMove {
    Skipped,
    Moved(Position),
    Attacked { damage: i32 },
    Blocked,
}

/// Everything placed on the current level.
#[derive(Clone, Debug)]
pub struct BoardState {
    pub(crate) size: i32,
    pub(crate) player: Position,
    pub(crate) exit: Position,
    pub(crate) enemies: Vec<Position>,
    pub(crate) pickups: HashMap<Position, i32>,
    pub(crate) food: i32,
}

impl BoardState {
    fn new(size: i32, food: i32) -> Self {
        Self {
            size,
            player: Position::ORIGIN,
            exit: Position::new(size - 1, size - 1),
            enemies: Vec::new(),
            pickups: HashMap::new(),
            food,
        }
    }

    pub(crate) fn in_bounds(&self, pos: Position) -> bool {
        (0..self.size).contains(&pos.x) && (0..self.size).contains(&pos.y)
    }

    pub(crate) fn has_enemy(&self, pos: Position) -> bool {
        self.enemies.contains(&pos)
    }

    /// Moves enemy `id` one step toward the player, attacking if adjacent.
    fn advance_enemy(&mut self, id: usize, damage: i32) -> Option<EnemyMove> {
        let pos = *self.enemies.get(id)?;
        let target = self.player;

        let next = if pos.x == target.x {
            pos.offset(0, (target.y - pos.y).signum())
        } else {
            pos.offset((target.x - pos.x).signum(), 0)
        };

        let outcome = if next == self.player {
            self.food -= damage;
            EnemyMove::Attacked { damage }
        } else if !self.in_bounds(next) || next == self.exit || self.has_enemy(next) {
            EnemyMove::Blocked
        } else {
            self.enemies[id] = next;
            EnemyMove::Moved(next)
        };
        Some(outcome)
    }
}

/// Cloneable handle to the shared board.
#[derive(Clone)]
pub struct Board {
    inner: Arc<Mutex<BoardState>>,
}

impl Board {
    pub fn new(size: i32, food: i32) -> Self {
        Self {
            inner: Arc::new(Mutex::new(BoardState::new(size, food))),
        }
    }

    pub(crate) fn with_state<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> R {
        let mut state = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }

    pub fn food(&self) -> i32 {
        self.with_state(|s| s.food)
    }

    pub fn set_food(&self, food: i32) {
        self.with_state(|s| s.food = food);
    }

    pub fn player(&self) -> Position {
        self.with_state(|s| s.player)
    }

    pub fn exit(&self) -> Position {
        self.with_state(|s| s.exit)
    }

    pub fn enemies(&self) -> Vec<Position> {
        self.with_state(|s| s.enemies.clone())
    }

    pub fn snapshot(&self) -> BoardState {
        self.with_state(|s| s.clone())
    }

    /// Clears the level and places a new layout. Food is kept.
    pub fn reset(&self, enemies: Vec<Position>, pickups: HashMap<Position, i32>) {
        self.with_state(|s| {
            s.player = Position::ORIGIN;
            s.exit = Position::new(s.size - 1, s.size - 1);
            s.enemies = enemies;
            s.pickups = pickups;
        });
    }
}

/// Enemy actor that chases the player every other turn.
pub struct Enemy {
    id: usize,
    board: Board,
    damage: i32,
    move_cost: Duration,
    skip_move: bool,
}

impl Enemy {
    pub fn new(id: usize, board: Board, damage: i32, move_cost: Duration) -> Self {
        Self {
            id,
            board,
            damage,
            move_cost,
            skip_move: false,
        }
    }

    /// Performs one turn and reports what happened.
    pub fn step(&mut self) -> Result<EnemyMove, CollaboratorError> {
        if self.skip_move {
            self.skip_move = false;
            return Ok(EnemyMove::Skipped);
        }

        let outcome = self
            .board
            .with_state(|s| s.advance_enemy(self.id, self.damage))
            .ok_or_else(|| format!("enemy #{} is not on the board", self.id))?;
        self.skip_move = true;
        Ok(outcome)
    }
}

impl Actor for Enemy {
    fn move_self(&mut self) -> Result<(), CollaboratorError> {
        let outcome = self.step()?;
        trace!(enemy = self.id, ?outcome, "Enemy turn");
        Ok(())
    }

    fn move_time_cost(&self) -> Duration {
        self.move_cost
    }
}

/// Number of enemies on a level: `floor(log2(level))`, so none on day 1.
pub fn enemy_count(level: u32) -> usize {
    level.checked_ilog2().unwrap_or(0) as usize
}

/// Level builder that lays out pickups and enemies on the inner cells.
pub struct BoardBuilder {
    board: Board,
    config: BoardConfig,
    rng: Mutex<StdRng>,
}

impl BoardBuilder {
    pub fn new(board: Board, config: BoardConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            board,
            config,
            rng: Mutex::new(rng),
        }
    }
}

impl LevelBuilder for BoardBuilder {
    fn setup_scene(
        &self,
        level: u32,
        actors: &mut ActorRegistry<'_>,
    ) -> Result<(), CollaboratorError> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        // Border cells stay clear so the player always has a route to the exit.
        let inner = 1..self.config.size - 1;
        let mut cells: Vec<Position> = inner
            .clone()
            .flat_map(|x| inner.clone().map(move |y| Position::new(x, y)))
            .collect();
        cells.shuffle(&mut *rng);
        let mut cells = cells.into_iter();

        let pickup_count = rng.gen_range(1..=5);
        let pickups: HashMap<Position, i32> = cells
            .by_ref()
            .take(pickup_count)
            .map(|pos| {
                let value = if rng.gen_bool(0.5) {
                    FOOD_PICKUP
                } else {
                    SODA_PICKUP
                };
                (pos, value)
            })
            .collect();

        let enemies: Vec<Position> = cells.take(enemy_count(level)).collect();
        let damages: Vec<i32> = enemies
            .iter()
            .map(|_| ENEMY_DAMAGE[rng.gen_range(0..ENEMY_DAMAGE.len())])
            .collect();

        debug!(
            day = level,
            pickups = pickups.len(),
            enemies = enemies.len(),
            "Board laid out"
        );
        self.board.reset(enemies, pickups);

        for (id, damage) in damages.into_iter().enumerate() {
            actors.register(Enemy::new(
                id,
                self.board.clone(),
                damage,
                self.config.enemy_move_cost,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(enemies: Vec<Position>, player: Position) -> Board {
        let board = Board::new(8, 50);
        board.reset(enemies, HashMap::new());
        board.with_state(|s| s.player = player);
        board
    }

    #[test]
    fn enemy_count_follows_log2_of_level() {
        assert_eq!(enemy_count(0), 0);
        assert_eq!(enemy_count(1), 0);
        assert_eq!(enemy_count(2), 1);
        assert_eq!(enemy_count(3), 1);
        assert_eq!(enemy_count(4), 2);
        assert_eq!(enemy_count(9), 3);
    }

    #[test]
    fn enemy_closes_column_first_then_row() {
        let board = board_with(vec![Position::new(4, 4)], Position::new(1, 4));
        let mut enemy = Enemy::new(0, board.clone(), 10, Duration::ZERO);

        assert_eq!(enemy.step().unwrap(), EnemyMove::Moved(Position::new(3, 4)));

        let board = board_with(vec![Position::new(2, 5)], Position::new(2, 1));
        let mut enemy = Enemy::new(0, board, 10, Duration::ZERO);

        assert_eq!(enemy.step().unwrap(), EnemyMove::Moved(Position::new(2, 4)));
    }

    #[test]
    fn enemy_skips_every_other_turn() {
        let board = board_with(vec![Position::new(5, 5)], Position::ORIGIN);
        let mut enemy = Enemy::new(0, board, 10, Duration::ZERO);

        assert!(matches!(enemy.step().unwrap(), EnemyMove::Moved(_)));
        assert_eq!(enemy.step().unwrap(), EnemyMove::Skipped);
        assert!(matches!(enemy.step().unwrap(), EnemyMove::Moved(_)));
    }

    #[test]
    fn adjacent_enemy_attacks_food() {
        let board = board_with(vec![Position::new(1, 0)], Position::ORIGIN);
        let mut enemy = Enemy::new(0, board.clone(), 20, Duration::ZERO);

        assert_eq!(enemy.step().unwrap(), EnemyMove::Attacked { damage: 20 });
        assert_eq!(board.food(), 30);
        assert_eq!(board.enemies(), vec![Position::new(1, 0)]);
    }

    #[test]
    fn enemies_do_not_stack_or_take_the_exit() {
        let board = board_with(
            vec![Position::new(3, 3), Position::new(2, 3)],
            Position::new(0, 3),
        );
        let mut second = Enemy::new(0, board.clone(), 10, Duration::ZERO);
        assert_eq!(second.step().unwrap(), EnemyMove::Blocked);

        let board = board_with(vec![Position::new(7, 6)], Position::new(7, 7));
        board.with_state(|s| s.exit = Position::new(7, 5));
        let mut enemy = Enemy::new(0, board, 10, Duration::ZERO);
        assert_eq!(enemy.step().unwrap(), EnemyMove::Attacked { damage: 10 });
    }

    #[test]
    fn missing_enemy_is_a_collaborator_failure() {
        let board = board_with(Vec::new(), Position::ORIGIN);
        let mut enemy = Enemy::new(3, board, 10, Duration::ZERO);

        assert!(enemy.move_self().is_err());
    }
}
