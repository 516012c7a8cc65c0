//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::FromRef,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::assets::AssetLoader;
use crate::models::AppConfig;
use crate::services::ColorService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ColorService>,
    pub config: Arc<AppConfig>,
}

impl FromRef<AppState> for Arc<ColorService> {
    fn from_ref(state: &AppState) -> Self {
        state.service.clone()
    }
}

/// Create application state from an asset loader.
///
/// The reference dataset is loaded exactly once here and shared by every
/// request.
pub fn create_app_state(asset_loader: Arc<AssetLoader>) -> anyhow::Result<AppState> {
    let config = Arc::new(AppConfig::load_from_assets(&asset_loader));
    let service = Arc::new(
        ColorService::from_assets(&asset_loader, &config)
            .map_err(|e| anyhow::anyhow!("Failed to create color service: {e}"))?,
    );

    Ok(AppState { service, config })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", post(api::handle_analyze))
        .route("/api/mix", post(api::handle_mix))
        .route("/api/delta-e", post(api::handle_delta_e))
        .route("/api/colors", get(api::handle_colors))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
