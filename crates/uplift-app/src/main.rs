//! Uplift application binary - composition root.
//!
//! Ties together all Uplift crates into a single executable:
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Wire the collaborator seams (emotion inference, analysis archive)
//! 3. Build the analyzer (classification pipeline + session store)
//! 4. Start the axum REST API server

use std::sync::Arc;

use clap::Parser;

use uplift_api::routes;
use uplift_api::state::AppState;
use uplift_core::config::UpliftConfig;
use uplift_session::{AnalysisArchive, Analyzer, LexiconInference, MemoryArchive, NoopArchive};

mod cli;

use cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Tracing.
    let default_filter = args.resolve_log_level().unwrap_or_else(|| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    tracing::info!("Starting Uplift v{}", env!("CARGO_PKG_VERSION"));

    // Config.
    let config_file = args.resolve_config_path();
    let mut config = UpliftConfig::load_or_default(&config_file);
    config.server.port = args.resolve_port(config.server.port);
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    // Collaborators. The lexicon stands in for a hosted emotion model; the
    // archive is in-process when enabled, a no-op otherwise.
    let inference = Arc::new(LexiconInference);
    let archive: Arc<dyn AnalysisArchive> = if config.archive.enabled {
        tracing::info!("In-memory analysis archive enabled");
        Arc::new(MemoryArchive::new())
    } else {
        Arc::new(NoopArchive)
    };

    let analyzer = Analyzer::new(&config, inference, archive);
    let state = AppState::new(config, analyzer);

    routes::start_server(state).await?;

    Ok(())
}
