//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{
        rejection::{BytesRejection, JsonRejection, QueryRejection},
        DefaultBodyLimit, Query, State,
    },
    routing::{get, post},
    Json, Router,
};
use hct_theme::Theme;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{ImageLoader, InMemoryThemeStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub theme_store: Arc<InMemoryThemeStore>,
    pub image_loader: Arc<ImageLoader>,
}

/// Create application state from configuration.
///
/// Fails if the configured initial seed is not a valid color.
pub fn create_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let seed = config
        .seed()
        .map_err(|e| anyhow::anyhow!("Invalid theme.seed {:?}: {e}", config.theme.seed))?;
    let theme_store = Arc::new(InMemoryThemeStore::new(Theme::from_seed(seed)));
    let image_loader = Arc::new(ImageLoader::from_config(&config.extraction));

    tracing::debug!(seed = %seed, dark = config.theme.dark, "Initial theme created");

    Ok(AppState {
        config: Arc::new(config),
        theme_store,
        image_loader,
    })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    // Oversized uploads are rejected with 413 before buffering
    let body_limit = state.config.extraction.max_image_bytes;

    Router::new()
        .route("/api/scheme", get(handle_scheme))
        .route("/api/palette", get(api::handle_palette))
        .route("/api/contrast", get(api::handle_contrast))
        .route(
            "/api/extract",
            post(handle_extract).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/api/theme", get(handle_get_theme).put(handle_put_theme))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_scheme(
    State(state): State<AppState>,
    query: Result<Query<api::scheme::SchemeQuery>, QueryRejection>,
) -> Result<Json<api::SchemeResponse>, ApiError> {
    api::handle_scheme(State(state.config), State(state.theme_store), query).await
}

async fn handle_extract(
    State(state): State<AppState>,
    query: Result<Query<api::extract::ExtractQuery>, QueryRejection>,
    body: Result<axum::body::Bytes, BytesRejection>,
) -> Result<Json<api::ExtractResponse>, ApiError> {
    api::handle_extract(State(state.config), State(state.image_loader), query, body).await
}

async fn handle_get_theme(
    State(state): State<AppState>,
) -> Result<Json<api::ThemeResponse>, ApiError> {
    api::handle_get_theme(State(state.theme_store)).await
}

async fn handle_put_theme(
    State(state): State<AppState>,
    request: Result<Json<api::UpdateThemeRequest>, JsonRejection>,
) -> Result<Json<api::ThemeResponse>, ApiError> {
    api::handle_put_theme(
        State(state.config),
        State(state.theme_store),
        State(state.image_loader),
        request,
    )
    .await
}
