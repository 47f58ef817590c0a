//! Virtual pets client binary.
//!
//! Plays a full game with the built-in caretaker and logs the final ranking.
//!
//! # Environment
//!
//! - `PET_GAME_SEED`, `PET_DATA_DIR`, `PET_NUMBER_OF_DAYS`, `PET_PLAYERS`:
//!   see [`pet_runtime::RuntimeConfig`]
//! - `RUST_LOG`: log filter (default: info)
//!
//! # Examples
//!
//! ```bash
//! PET_GAME_SEED=42 PET_PLAYERS="Ann:Rex=dog+cat,Bob:horse" cargo run -p pet-client
//! ```

use anyhow::Result;
use pet_client::Client;
use pet_runtime::RuntimeConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RuntimeConfig::from_env()?;
    tracing::info!("Starting virtual pets");
    tracing::info!("Players: {}", config.roster.len());

    let client = Client::builder().config(config).build()?;
    tracing::info!("Seed: {:?}", client.session().seed());

    let standings = client.run()?;
    for standing in &standings {
        tracing::info!("#{} {} ({} points)", standing.rank, standing.player, standing.score);
    }

    tracing::info!("Game finished");
    Ok(())
}
