use std::sync::Arc;

use backend::{config::Config, routes::AppState, store::RedisVoteSink};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[rocket::main]
async fn main() {
    init_logging();
    info!("🚀 Starting vote server");

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let sink = match RedisVoteSink::connect(&config.redis_url).await {
        Ok(sink) => sink,
        Err(e) => {
            error!("Could not reach vote store: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "🗳️ Ballot: {} vs {}",
        config.options.option_a(),
        config.options.option_b()
    );

    let state = AppState::new(config, Arc::new(sink));

    if let Err(e) = backend::rocket(state).launch().await {
        error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}
