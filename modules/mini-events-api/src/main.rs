use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mini_events_api::graphql::build_schema;
use mini_events_api::routes;
use mini_events_api::service::EventService;
use mini_events_common::file_config::{self, FileConfig};
use mini_events_common::{AppConfig, Environment};
use mini_events_store::{seed_events, MemoryEventStore};

#[derive(Parser)]
#[command(name = "mini-events-server", about = "Mini Event Manager GraphQL server")]
struct Cli {
    /// Path to an optional config TOML file (limits, endpoint path, seed data)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_tracing(environment: Environment) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if environment.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::from_env()?;
    init_tracing(config.environment);
    config.log_summary();

    let file_config = match &cli.config {
        Some(path) => {
            tracing::info!(config = %path.display(), "Loading config");
            file_config::load_config(path)?
        }
        None => FileConfig::default(),
    };

    let seed = seed_events(&file_config.seed).context("Invalid seed data")?;
    tracing::info!(events = seed.len(), "Event store seeded");

    let store = Arc::new(MemoryEventStore::with_events(seed));
    let service = Arc::new(EventService::new(store, file_config.limits));
    let schema = build_schema(service, config.environment);
    let app = routes::build_router(schema, config.environment, &file_config.server);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("{} starting on {addr}", config.app_name);
    if config.environment.is_development() {
        tracing::info!(
            "GraphiQL IDE available at http://{addr}{}",
            file_config.server.graphql_path
        );
    }

    axum::serve(listener, app).await?;
    Ok(())
}
