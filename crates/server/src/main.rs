//! Delights by Jummy backend - public storefront + admin JSON API.
//!
//! Serves the static site and the `/api` routes on one port. Storage is
//! either three local JSON files or the hosted Supabase tables, chosen once
//! at startup from the environment.

#![cfg_attr(not(test), forbid(unsafe_code))]

use delights_server::config::AppConfig;
use delights_server::routes;
use delights_server::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "delights_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build application state (selects the storage backing)
    let state =
        AppState::from_config(config.clone()).expect("Failed to initialize application state");

    tracing::info!(backend = %state.store().backend(), "storage backing selected");
    if state.auth().is_bypass() {
        tracing::warn!(
            "admin auth bypass is active (no ADMIN_PASSWORD or ALLOW_ANY_PASSWORD=1); \
             every request is treated as admin"
        );
    }

    // Build router
    let app = routes::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("delights backend listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
