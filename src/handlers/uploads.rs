use crate::errors::ServiceError;
use crate::handlers::AppState;
use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

/// Serve a stored upload by its flat filename. Names carrying path
/// separators or parent references never reach the filesystem.
pub async fn serve_upload(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
        return Err(ServiceError::NotFound("File not found".to_string()));
    }

    let path = state.uploads.dir().join(&filename);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|_| ServiceError::NotFound("File not found".to_string()))?;

    Ok(([(header::CONTENT_TYPE, content_type_for(&filename))], bytes))
}

fn content_type_for(filename: &str) -> &'static str {
    match filename.rsplit_once('.').map(|(_, ext)| ext.to_lowercase()) {
        Some(ext) if ext == "png" => "image/png",
        Some(ext) if ext == "jpg" || ext == "jpeg" => "image/jpeg",
        Some(ext) if ext == "gif" => "image/gif",
        Some(ext) if ext == "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}
