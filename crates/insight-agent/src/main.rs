//! insight-agent server entry point

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use insight_agent::ApiError;
use insight_agent::api::AppState;
use insight_agent::api::run_server;
use insight_agent::config::Config;
use insight_agent::service::TextAnalysisService;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // Initialize logging (RUST_LOG, defaults to info)
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();

  // Load configuration
  let config = Config::from_env()?;
  tracing::info!(port = config.port, "Configuration loaded");

  let service = Arc::new(TextAnalysisService::new());

  let state = AppState::new(config, service);

  run_server(state).await
}
