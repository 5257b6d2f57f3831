use crate::errors::ServiceError;
use crate::models::Document;
use chrono::Utc;
use std::sync::Mutex;
use tracing::{info, warn};

/// In-memory collection of important documents.
///
/// Keeps its own monotonic ID counter, fully independent from the item
/// store. Search is a plain case-insensitive substring test over the
/// concatenated text fields; it deliberately skips keyword extraction so
/// exact tags like "travel" or "government" always hit.
pub struct DocumentStore {
    inner: Mutex<Inner>,
}

struct Inner {
    next_id: u64,
    documents: Vec<Document>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                documents: Vec::new(),
            }),
        }
    }

    /// Register a document. Name and type are required; description and
    /// tags default to empty.
    pub fn add(
        &self,
        document_name: &str,
        document_type: &str,
        description: &str,
        tags: &str,
        image_path: Option<String>,
    ) -> Result<Document, ServiceError> {
        if document_name.trim().is_empty() || document_type.trim().is_empty() {
            return Err(ServiceError::ValidationError(
                "Document name and type are required".to_string(),
            ));
        }

        let mut inner = self.inner.lock().unwrap();
        let document = Document {
            id: inner.next_id,
            document_name: document_name.to_string(),
            document_type: document_type.to_string(),
            description: description.to_string(),
            tags: tags.to_string(),
            image_path,
            created_at: Utc::now(),
        };
        inner.next_id += 1;
        inner.documents.push(document.clone());

        info!(id = document.id, document_name = %document.document_name, "document added");
        Ok(document)
    }

    /// All documents, newest first (stable for equal timestamps).
    pub fn list_all(&self) -> Vec<Document> {
        let inner = self.inner.lock().unwrap();
        let mut documents = inner.documents.clone();
        documents.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        documents
    }

    /// Every document whose name, type, description or tags contain the
    /// query, scanned most recent first. Empty result is a NotFound.
    pub fn find(&self, query: &str) -> Result<Vec<Document>, ServiceError> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Err(ServiceError::ValidationError(
                "Query is required".to_string(),
            ));
        }

        let inner = self.inner.lock().unwrap();
        let results: Vec<Document> = inner
            .documents
            .iter()
            .rev()
            .filter(|doc| {
                let searchable = format!(
                    "{} {} {} {}",
                    doc.document_name, doc.document_type, doc.description, doc.tags
                )
                .to_lowercase();
                searchable.contains(&query)
            })
            .cloned()
            .collect();

        if results.is_empty() {
            return Err(ServiceError::NotFound(
                "No documents found matching your search".to_string(),
            ));
        }
        Ok(results)
    }

    /// Remove a document by ID; the backing image file is removed
    /// best-effort, identical policy to the item store.
    pub async fn delete(&self, id: u64) -> Result<(), ServiceError> {
        let removed = {
            let mut inner = self.inner.lock().unwrap();
            let position = inner.documents.iter().position(|doc| doc.id == id);
            match position {
                Some(index) => inner.documents.remove(index),
                None => return Err(ServiceError::NotFound("Document not found".to_string())),
            }
        };

        if let Some(path) = removed.image_path {
            if let Err(err) = tokio::fs::remove_file(&path).await {
                warn!(%path, %err, "failed to remove document image, continuing");
            }
        }

        info!(id, "document deleted");
        Ok(())
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}
