//! MindGauge Screening Server
//!
//! Educational web service that scores free text and short voice recordings
//! for depression-risk indicators and blends them into a single advisory
//! assessment. Not a diagnostic tool.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       MINDGAUGE                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌─────────────┐   ┌─────────────────────┐ │
//! │  │  API      │   │  Analyzers  │   │  Risk Predictor     │ │
//! │  │  (Axum)   │──▶│ text  voice │──▶│  (weighted blend +  │ │
//! │  │           │   │             │   │   threshold table)  │ │
//! │  └───────────┘   └─────────────┘   └─────────────────────┘ │
//! │                                                             │
//! │  Stateless: every request is a one-shot pure computation.   │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod models;
mod handlers;
mod logic;
mod error;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use std::net::SocketAddr;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "mindgauge=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("MindGauge server starting...");
    tracing::info!("Environment: {}", config.environment);

    let state = AppState { config: config.clone() };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let max_upload = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/v1/assess", post(handlers::assess::combined))
        .route("/api/v1/assess/text", post(handlers::assess::text))
        .route("/api/v1/assess/voice", post(handlers::assess::voice))
        .route("/api/v1/resources", get(handlers::resources::list))
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
