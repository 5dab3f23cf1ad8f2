//! hitbadge gateway
//!
//! Serves hit-counter badges: every request path is a counter, every hit
//! increments it and returns an SVG badge with the new count.

use tracing_subscriber::{fmt, EnvFilter};

use hitbadge_gateway::{app_state, config, router, shutdown_signal};

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cfg = match config::load_from_env() {
        Ok(cfg) => cfg,
        Err(error) => {
            tracing::error!(%error, "config load failed, aborting");
            return;
        }
    };
    let listen = match cfg.server.listen_addr() {
        Ok(addr) => addr,
        Err(error) => {
            tracing::error!(%error, "bad listen address, aborting");
            return;
        }
    };

    let state = match app_state::AppState::from_config(cfg).await {
        Ok(state) => state,
        Err(error) => {
            tracing::error!(%error, "failed to build state, aborting");
            return;
        }
    };
    let app = router::build_router(state);

    let listener = match tokio::net::TcpListener::bind(listen).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(%listen, %error, "failed to bind TCP listener, aborting");
            return;
        }
    };
    tracing::info!(%listen, "hitbadge-gateway starting");

    if let Err(error) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(%error, "server exited with error");
    }
}
