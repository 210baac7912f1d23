//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::models::AppConfig;
use crate::services::{RenderService, SessionStore};

/// Room for multipart boundaries and headers on top of the image itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// How often idle sessions are swept.
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub sessions: Arc<SessionStore>,
    pub renderer: Arc<RenderService>,
}

/// Create application state from configuration.
pub fn create_app_state(config: AppConfig) -> AppState {
    let sessions = Arc::new(SessionStore::new(
        config.session_ttl_secs,
        config.max_sessions,
    ));
    let renderer = Arc::new(RenderService::new(config.canvas, config.max_upload_bytes));

    AppState {
        config: Arc::new(config),
        sessions,
        renderer,
    }
}

/// Build the router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state
        .config
        .max_upload_bytes
        .saturating_add(MULTIPART_OVERHEAD);

    Router::new()
        // Browser page
        .route("/", get(api::handle_index))
        .route("/doticon.css", get(api::handle_style))
        .route("/doticon.js", get(api::handle_script))
        // Image API
        .route("/api/image", post(api::handle_upload))
        .route("/api/image/:id", delete(api::handle_delete))
        .route("/api/image/:id/render", get(api::handle_render))
        .route("/api/image/:id/download", get(api::handle_download))
        .route("/api/convert", post(api::handle_convert))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}

/// Periodically drop idle sessions so abandoned uploads do not pile up.
pub fn spawn_session_sweeper(sessions: Arc<SessionStore>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            sessions.purge_expired().await;
        }
    })
}
