//! Work-schedule engine server.
//!
//! Loads the YAML configuration (path from `SCHEDULE_ENGINE_CONFIG`,
//! default `./config/schedule.yaml`), rehydrates any saved schedule and
//! serves the API under the configured base path.

use axum::Router;
use tracing::info;
use tracing_subscriber::EnvFilter;

use schedule_engine::api::{AppState, create_router};
use schedule_engine::config::{ConfigLoader, EngineConfig};
use schedule_engine::error::ScheduleError;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::var("SCHEDULE_ENGINE_CONFIG")
        .unwrap_or_else(|_| "./config/schedule.yaml".to_string());
    let config = match ConfigLoader::load(&config_path) {
        Ok(loader) => loader.config().clone(),
        Err(ScheduleError::ConfigNotFound { path }) => {
            info!(%path, "no configuration file, using defaults");
            EngineConfig::default()
        }
        Err(err) => return Err(err.into()),
    };

    let server = config.server.clone();
    let state = AppState::from_config(config);
    let api = create_router(state);
    let app = if server.base_path == "/" || server.base_path.is_empty() {
        api
    } else {
        Router::new().nest(&server.base_path, api)
    };

    let addr = format!("{}:{}", server.host, server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, base_path = %server.base_path, "work-schedule engine listening");
    axum::serve(listener, app).await?;
    Ok(())
}
