use std::sync::Arc;

use room_mapper::api::{self, AppState};
use room_mapper::config::{load_config, AppConfig};
use room_mapper::matcher::MapperImpl;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {panic_info:?}");
    }));

    // Load configuration from file, falling back to defaults
    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("Config load error: {e}; using defaults");
            AppConfig::default()
        }
    };

    let state = Arc::new(AppState {
        mapper: MapperImpl::new(),
    });
    let app = api::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {addr}: {e}");
            return;
        }
    };

    info!("Room mapping API listening on {addr}");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {e}");
    }
}
