//! Scavenger demo binary.
//!
//! Loads configuration from the environment (and `.env`), installs logging,
//! then plays a scripted session to the end.
//!
//! ```bash
//! RNG_SEED=7 MAX_LEVELS=5 RUST_LOG=debug cargo run -p scavenger-client
//! ```
use anyhow::Result;
use scavenger_client::{Client, ClientConfig, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(&config.session_id)?;

    tracing::info!("Starting scavenger");
    tracing::info!("Board size: {}", config.board.size);
    tracing::info!("Max days: {:?}", config.max_levels);

    let client = Client::builder().config(config).build()?;
    let summary = client.run().await?;

    if summary.starved {
        println!("Starved on day {}.", summary.days);
    } else {
        println!("Survived {} days with {} food left.", summary.days, summary.food);
    }
    Ok(())
}
