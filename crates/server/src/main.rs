//! Cafe API - HTTP CRUD over the cafe record store.
//!
//! This binary serves the public cafe API on port 5000.
//!
//! # Architecture
//!
//! - Axum web framework with JSON responses
//! - Askama template for the landing page
//! - `SQLite` (via sqlx) for the cafe records
//! - A plaintext key file gating replace/delete, cached at startup
//!
//! # Signals
//!
//! - Ctrl+C / SIGTERM - graceful shutdown
//! - SIGHUP - re-read the API key file

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cafe_api_server::auth::ApiKeyProvider;
use cafe_api_server::config::ServerConfig;
use cafe_api_server::state::AppState;
use cafe_api_server::{db, routes};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cafe_api_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Initialize database connection pool
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool created");

    // NOTE: Migrations are NOT run automatically on startup.
    // Run them explicitly via: cargo run -p cafe-api-cli -- migrate

    // Load the API key; a missing or empty key file is fatal here rather
    // than a per-request error.
    let api_key = ApiKeyProvider::load(&config.api_key_file).expect("Failed to load API key file");
    tracing::info!(path = %config.api_key_file.display(), "API key loaded");

    // Build application state
    let state = AppState::new(config.clone(), pool, api_key);

    // Re-read the key file on SIGHUP
    spawn_key_reload(state.clone());

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("cafe api listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Reload the API key when the process receives SIGHUP.
fn spawn_key_reload(state: AppState) {
    #[cfg(unix)]
    tokio::spawn(async move {
        let Ok(mut hangup) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::hangup())
        else {
            tracing::warn!("Failed to install SIGHUP handler, key reload disabled");
            return;
        };

        while hangup.recv().await.is_some() {
            match state.api_key().reload() {
                Ok(()) => tracing::info!("API key reloaded"),
                Err(e) => tracing::warn!("API key reload failed, keeping previous key: {e}"),
            }
        }
    });

    #[cfg(not(unix))]
    drop(state);
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
