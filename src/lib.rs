//! FindIt API Library
//!
//! Backend for the lost-item and important-document tracker: a JSON/HTTP
//! CRUD surface over two independent in-memory stores, with heuristic
//! keyword extraction and filename-based object hints.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod errors;
pub mod handlers;
pub mod ml;
pub mod models;
pub mod services;

use axum::{extract::DefaultBodyLimit, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use services::documents::DocumentStore;
use services::items::ItemStore;
use services::uploads::UploadStore;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub config: config::AppConfig,
    pub items: Arc<ItemStore>,
    pub documents: Arc<DocumentStore>,
    pub uploads: Arc<UploadStore>,
}

impl AppState {
    pub fn new(config: config::AppConfig) -> Self {
        let uploads = Arc::new(UploadStore::new(config.upload_dir.clone()));
        Self {
            config,
            items: Arc::new(ItemStore::new()),
            documents: Arc::new(DocumentStore::new()),
            uploads,
        }
    }
}

/// Build the application router: `/api/*` routes, request tracing, and the
/// global body cap that rejects oversized uploads before processing.
pub fn app(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .nest("/api", handlers::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
