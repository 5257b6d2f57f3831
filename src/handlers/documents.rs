use crate::errors::ServiceError;
use crate::handlers::AppState;
use crate::models::FindRequest;
use crate::services::uploads::UploadStore;
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::json;

pub fn document_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_document))
        .route("/find", post(find_documents))
        .route("/all", get(get_all_documents))
        .route("/delete/:id", delete(delete_document))
}

/// Register a document from a multipart form (`document_name`,
/// `document_type`, optional `description`, `tags`, `image`). The image is
/// stored for reference only.
async fn add_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ServiceError> {
    let mut document_name = String::new();
    let mut document_type = String::new();
    let mut description = String::new();
    let mut tags = String::new();
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("document_name") => document_name = field.text().await?,
            Some("document_type") => document_type = field.text().await?,
            Some("description") => description = field.text().await?,
            Some("tags") => tags = field.text().await?,
            Some("image") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                if !filename.is_empty() {
                    let data = field.bytes().await?;
                    upload = Some((filename, data.to_vec()));
                }
            }
            _ => {}
        }
    }

    // Reject before the upload ever touches disk, otherwise a failed add
    // would leave an orphaned file behind.
    if document_name.trim().is_empty() || document_type.trim().is_empty() {
        return Err(ServiceError::ValidationError(
            "Document name and type are required".to_string(),
        ));
    }

    let mut image_path = None;
    if let Some((filename, data)) = upload {
        if UploadStore::is_allowed(&filename) {
            image_path = Some(state.uploads.save(&filename, &data, Some("doc_")).await?);
        }
    }

    let document = state
        .documents
        .add(&document_name, &document_type, &description, &tags, image_path)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "id": document.id,
            "document_name": document.document_name,
            "message": "Document added successfully",
        })),
    ))
}

/// Substring search across name, type, description and tags.
async fn find_documents(
    State(state): State<AppState>,
    Json(request): Json<FindRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let documents = state.documents.find(&request.query)?;
    Ok(Json(json!({ "documents": documents })))
}

async fn get_all_documents(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({ "documents": state.documents.list_all() }))
}

async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ServiceError> {
    state.documents.delete(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Document deleted successfully",
    })))
}
