use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered lost item. Records are immutable after creation; the
/// `created_at` field serializes as `timestamp` for wire compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub item_name: String,
    pub location: String,
    pub image_path: Option<String>,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// An important-document record, tracked independently from items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: u64,
    pub document_name: String,
    pub document_type: String,
    /// Free-form description, defaults to empty
    pub description: String,
    /// Free-form comma-separated tags, defaults to empty
    pub tags: String,
    pub image_path: Option<String>,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Body of the free-text search endpoints.
#[derive(Debug, Deserialize)]
pub struct FindRequest {
    #[serde(default)]
    pub query: String,
}
