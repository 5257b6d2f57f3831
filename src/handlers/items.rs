use crate::errors::ServiceError;
use crate::handlers::AppState;
use crate::ml::object_hint;
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

pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/add_item", post(add_item))
        .route("/find_item", post(find_item))
        .route("/get_all_items", get(get_all_items))
        .route("/delete_item/:id", delete(delete_item))
}

/// Register an item from a multipart form (`item_name`, `location`,
/// optional `image`). A stored image also produces an object hint from
/// its filename.
async fn add_item(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ServiceError> {
    let mut item_name = String::new();
    let mut location = String::new();
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("item_name") => item_name = field.text().await?,
            Some("location") => location = field.text().await?,
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
    if item_name.trim().is_empty() || location.trim().is_empty() {
        return Err(ServiceError::ValidationError(
            "Item name and location are required".to_string(),
        ));
    }

    let mut image_path = None;
    let mut detected_object = None;
    if let Some((filename, data)) = upload {
        if UploadStore::is_allowed(&filename) {
            image_path = Some(state.uploads.save(&filename, &data, None).await?);
            detected_object = object_hint::hint(&filename);
        }
    }

    let item = state.items.add(&item_name, &location, image_path)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "id": item.id,
            "item_name": item.item_name,
            "detected_object": detected_object,
            "message": "Item added successfully",
        })),
    ))
}

/// Resolve a natural-language query to the most recently added matching
/// item.
async fn find_item(
    State(state): State<AppState>,
    Json(request): Json<FindRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let query = request.query.trim();
    if query.is_empty() {
        return Err(ServiceError::ValidationError(
            "Query is required".to_string(),
        ));
    }

    let item = state.items.find(query)?;
    Ok(Json(item))
}

async fn get_all_items(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({ "items": state.items.list_all() }))
}

async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ServiceError> {
    state.items.delete(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Item deleted successfully",
    })))
}
