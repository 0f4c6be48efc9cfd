//! Client configuration structures and loaders.
use std::env;
use std::time::Duration;

use game_core::TurnConfig;
use runtime::RuntimeConfig;

/// Configuration required to bootstrap the coordinator and the demo board.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub runtime: RuntimeConfig,
    pub board: BoardConfig,
    /// Host driver cycle; the coordinator is ticked once per frame.
    pub frame_interval: Duration,
    /// Stop after this many days survived. `None` plays until starvation.
    pub max_levels: Option<u32>,
    pub session_id: Option<String>,
    pub rng_seed: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig::default(),
            board: BoardConfig::default(),
            frame_interval: Duration::from_millis(16),
            max_levels: None,
            session_id: None,
            rng_seed: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `LEVEL_START_DELAY_MS` - Day banner hold time (default: 2000)
    /// - `TURN_DELAY_MS` - Delay at the start of each enemy pass (default: 100)
    /// - `STARTING_FOOD` - Player food at session start (default: 100)
    /// - `EVENT_BUFFER_SIZE` - Event bus capacity per topic (default: 100)
    /// - `FRAME_INTERVAL_MS` - Host tick interval (default: 16)
    /// - `BOARD_SIZE` - Board width and height in cells (default: 8)
    /// - `ENEMY_MOVE_MS` - Enemy move time cost (default: 100)
    /// - `FOOD_PER_MOVE` - Food spent per player move (default: 1)
    /// - `MAX_LEVELS` - Stop after surviving this many days (default: unlimited)
    /// - `GAME_SESSION_ID` - Session identifier for log files (default: auto-generated)
    /// - `RNG_SEED` - Seed for board generation (default: entropy)
    pub fn from_env() -> Self {
        let mut config = Self::default();
        let mut turn: TurnConfig = config.runtime.turn.clone();

        if let Some(ms) = read_env::<u64>("LEVEL_START_DELAY_MS") {
            turn = turn.with_level_start_delay(Duration::from_millis(ms));
        }
        if let Some(ms) = read_env::<u64>("TURN_DELAY_MS") {
            turn = turn.with_turn_delay(Duration::from_millis(ms));
        }
        if let Some(food) = read_env::<i32>("STARTING_FOOD") {
            turn = turn.with_starting_resource(food);
        }
        config.runtime.turn = turn;

        if let Some(capacity) = read_env::<usize>("EVENT_BUFFER_SIZE") {
            config.runtime.event_buffer_size = capacity.max(1);
        }
        if let Some(ms) = read_env::<u64>("FRAME_INTERVAL_MS") {
            config.frame_interval = Duration::from_millis(ms.max(1));
        }

        if let Some(size) = read_env::<i32>("BOARD_SIZE") {
            config.board.size = size.max(BoardConfig::MIN_SIZE);
        }
        if let Some(ms) = read_env::<u64>("ENEMY_MOVE_MS") {
            config.board.enemy_move_cost = Duration::from_millis(ms);
        }
        if let Some(food) = read_env::<i32>("FOOD_PER_MOVE") {
            config.board.food_per_move = food.max(0);
        }

        config.max_levels = read_env::<u32>("MAX_LEVELS").filter(|&n| n > 0);
        config.session_id = env::var("GAME_SESSION_ID").ok();
        config.rng_seed = read_env::<u64>("RNG_SEED");

        config
    }
}

#[derive(Clone, Debug)]
pub struct BoardConfig {
    pub size: i32,
    pub enemy_move_cost: Duration,
    pub food_per_move: i32,
}

impl BoardConfig {
    pub const MIN_SIZE: i32 = 3;
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: 8,
            enemy_move_cost: Duration::from_millis(100),
            food_per_move: 1,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
