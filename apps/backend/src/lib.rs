pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use pronunciation_core::{Catalog, MatchThresholds};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub thresholds: MatchThresholds,
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    tracing::info!("Loading scenarios...");
    let catalog = load_catalog(&config)?;
    tracing::info!("Loaded {} scenarios", catalog.len());

    let state = AppState {
        catalog: Arc::new(catalog),
        thresholds: config.thresholds,
    };

    let app = build_router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/match", post(routes::pronunciation::grade))
        .route("/api/scenarios", get(routes::scenarios::list))
        .route("/api/scenarios/:id", get(routes::scenarios::get))
        .route(
            "/api/scenarios/:id/drill/:index",
            post(routes::scenarios::drill_attempt),
        )
        .route(
            "/api/scenarios/:id/goals/evaluate",
            post(routes::scenarios::evaluate),
        )
        .with_state(state)
}

/// Builtin scenarios, or the file named by SCENARIOS_PATH.
pub fn load_catalog(config: &AppConfig) -> anyhow::Result<Catalog> {
    let catalog = match &config.scenarios_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Catalog::from_json(&content)?
        }
        None => Catalog::builtin()?,
    };
    Ok(catalog)
}

async fn health_check() -> &'static str {
    "OK"
}
