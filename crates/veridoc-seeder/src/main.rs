//! Demonstration seeder for the Veridoc recognition event store.
//!
//! Seeds a fresh owner with fixed sample recognitions, then reads them
//! back grouped by event and by day, logging summaries.
//!
//! # Run Sequence
//!
//! 1. Load configuration from `veridoc-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Connect to the Redis-compatible store
//! 4. Save the sample recognitions
//! 5. List recognitions in event-time order and log each
//! 6. List day aggregates in day order and log each

mod config;
mod error;
mod sample;

use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;
use veridoc_store::{RecognitionStore, RedisPool};

use crate::config::SeederConfig;
use crate::error::SeederError;

/// Config file looked up relative to the working directory.
const CONFIG_PATH: &str = "veridoc-config.yaml";

/// Application entry point for the seeder.
///
/// # Errors
///
/// Returns an error if configuration loading, the store connection, or
/// any store operation fails.
#[tokio::main]
async fn main() -> Result<(), SeederError> {
    // 1. Load configuration; a missing file means defaults.
    let config_path = Path::new(CONFIG_PATH);
    let config = if config_path.exists() {
        SeederConfig::from_file(config_path)?
    } else {
        SeederConfig::default()
    };

    // 2. Initialize structured logging. RUST_LOG overrides the
    //    configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("veridoc-seeder starting");
    info!(
        redis_url = config.store.redis_url,
        min_amount = config.seed.min_amount,
        max_amount = config.seed.max_amount,
        "Configuration loaded"
    );

    // 3. Connect to the store.
    let pool = RedisPool::connect(&config.store.redis_url).await?;

    // 4. Save the sample recognitions.
    let samples = sample::build(&config.seed)?;
    let store = RecognitionStore::new(&pool);
    for recognition in &samples.recognitions {
        store.save_recognition(samples.owner, recognition).await?;
    }
    info!(
        owner = %samples.owner,
        count = samples.recognitions.len(),
        "Sample recognitions saved"
    );

    // 5. Read back the event list.
    let recognitions = store.list_recognitions(samples.owner).await?;
    info!(count = recognitions.len(), "Recognitions loaded");
    for recognition in &recognitions {
        info!(
            id = %recognition.id,
            time = %recognition.time,
            amount = recognition.amount,
            verified = recognition.verified,
            app_id = %recognition.app_id,
            document_type = ?recognition.document_type,
            "recognition"
        );
    }

    // 6. Read back the day aggregates.
    let days = store.list_recognition_days(samples.owner).await?;
    info!(count = days.len(), "Recognition days loaded");
    for day in &days {
        info!(
            day = %day.day.format("%Y-%m-%d"),
            amount = day.amount,
            success = day.success,
            failed = day.failed,
            "recognition day"
        );
    }

    Ok(())
}
