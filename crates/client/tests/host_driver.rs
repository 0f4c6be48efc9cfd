//! End-to-end runs of the host driver on a paused clock.
use std::sync::Arc;
use std::time::Duration;

use runtime::{RuntimeConfig, TurnConfig};
use scavenger_client::presenter::ConsolePresenter;
use scavenger_client::{BoardConfig, Client, ClientConfig, RunSummary};
use serial_test::serial;

fn config(board: BoardConfig, max_levels: Option<u32>) -> ClientConfig {
    let turn = TurnConfig::new()
        .with_level_start_delay(Duration::from_millis(200))
        .with_turn_delay(Duration::from_millis(10));
    ClientConfig {
        runtime: RuntimeConfig {
            turn,
            ..RuntimeConfig::default()
        },
        board,
        frame_interval: Duration::from_millis(16),
        max_levels,
        session_id: None,
        rng_seed: Some(7),
    }
}

async fn play(
    config: ClientConfig,
) -> (RunSummary, Arc<ConsolePresenter<Vec<u8>>>) {
    let presenter = Arc::new(ConsolePresenter::new(Vec::new()));
    let client = Client::builder()
        .config(config)
        .presenter(presenter.clone())
        .build()
        .expect("client builds");
    let summary = client.run().await.expect("run completes");
    (summary, presenter)
}

#[tokio::test(start_paused = true)]
#[serial]
async fn starving_on_the_first_move_ends_the_run() {
    let board = BoardConfig {
        food_per_move: 100,
        ..BoardConfig::default()
    };
    let (summary, presenter) = play(config(board, None)).await;

    assert_eq!(
        summary,
        RunSummary {
            days: 1,
            food: 0,
            starved: true,
        }
    );
    assert_eq!(
        presenter.showing().as_deref(),
        Some("After 1 days you starved.")
    );
    assert!(!runtime::is_session_live());
}

#[tokio::test(start_paused = true)]
#[serial]
async fn reaching_the_exit_on_the_last_day_stops_the_run() {
    let board = BoardConfig {
        size: 4,
        ..BoardConfig::default()
    };
    let (summary, presenter) = play(config(board, Some(1))).await;

    assert_eq!(summary.days, 1);
    assert!(!summary.starved);
    // Six moves to cross a 4x4 board, plus whatever pickups were on the way.
    assert!(summary.food >= 94);
    assert_eq!(presenter.showing(), None);
}

#[tokio::test(start_paused = true)]
#[serial]
async fn days_advance_through_the_exit() {
    let board = BoardConfig {
        size: 4,
        ..BoardConfig::default()
    };
    let (summary, _) = play(config(board, Some(2))).await;

    assert_eq!(summary.days, 2);
}

#[tokio::test]
#[serial]
async fn build_requires_config() {
    let err = Client::builder().build().err().expect("missing config");
    assert!(err.to_string().contains("config"));
    assert!(!runtime::is_session_live());
}
