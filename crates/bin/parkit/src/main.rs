//! # parkit — parking facility console
//!
//! Composition root that wires all adapters together and runs the shell.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the tracing subscriber (stderr, so prompts on stdout stay clean)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct the parking service, injecting adapters via port traits
//! - Run the interactive menu on stdin/stdout
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod shell;

use std::sync::Arc;

use parkit_adapter_console::{ConsoleNotifier, LineInputReader};
use parkit_adapter_storage_sqlite_sqlx::{
    Config as StorageConfig, SqliteParkingSpotRepository, SqliteTicketRepository,
};
use parkit_app::services::parking_service::ParkingService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    init_tracing(&config.logging.filter);

    // Database
    let db = StorageConfig {
        database_url: config.database_url().to_string(),
        busy_timeout: config.busy_timeout(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let spot_repo = SqliteParkingSpotRepository::new(pool.clone());
    let ticket_repo = SqliteTicketRepository::new(pool);

    // Console
    let input = Arc::new(LineInputReader::stdin());
    let console = Arc::new(ConsoleNotifier::stdout());

    // Services
    let parking_service = ParkingService::new(
        spot_repo,
        ticket_repo,
        Arc::clone(&input),
        Arc::clone(&console),
    );

    tracing::info!(database_url = config.database_url(), "parkit started");
    shell::run(&parking_service, input.as_ref(), console.as_ref()).await;

    Ok(())
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("parkit=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
