pub mod documents;
pub mod health;
pub mod items;
pub mod uploads;

use axum::{routing::get, Router};

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// All routes under `/api`, exact paths preserved from the original
/// deployment for client compatibility.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(items::item_routes())
        .nest("/documents", documents::document_routes())
        .route("/uploads/:filename", get(uploads::serve_upload))
        .route("/health", get(health::health_check))
}
