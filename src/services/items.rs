use crate::errors::ServiceError;
use crate::ml::keyword_extractor;
use crate::models::Item;
use chrono::Utc;
use std::sync::Mutex;
use tracing::{info, warn};

/// In-memory collection of lost items.
///
/// One mutex guards both the monotonic ID counter and the records, so
/// add/find/list/delete are linearizable. IDs are never reused, even after
/// deletion. The lock is never held across an await; image-file removal
/// happens after the record is gone.
pub struct ItemStore {
    inner: Mutex<Inner>,
}

struct Inner {
    next_id: u64,
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                items: Vec::new(),
            }),
        }
    }

    /// Register a new item. Name and location are required.
    pub fn add(
        &self,
        item_name: &str,
        location: &str,
        image_path: Option<String>,
    ) -> Result<Item, ServiceError> {
        if item_name.trim().is_empty() || location.trim().is_empty() {
            return Err(ServiceError::ValidationError(
                "Item name and location are required".to_string(),
            ));
        }

        let mut inner = self.inner.lock().unwrap();
        let item = Item {
            id: inner.next_id,
            item_name: item_name.to_string(),
            location: location.to_string(),
            image_path,
            created_at: Utc::now(),
        };
        inner.next_id += 1;
        inner.items.push(item.clone());

        info!(id = item.id, item_name = %item.item_name, "item added");
        Ok(item)
    }

    /// All items, newest first. The sort is stable, so records sharing a
    /// timestamp keep their insertion order.
    pub fn list_all(&self) -> Vec<Item> {
        let inner = self.inner.lock().unwrap();
        let mut items = inner.items.clone();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items
    }

    /// Resolve a free-text query to a single item.
    ///
    /// Keywords come from the extractor; items are scanned most recent
    /// first and the first item whose name contains any keyword (in
    /// extractor output order, case-insensitive) wins.
    pub fn find(&self, query: &str) -> Result<Item, ServiceError> {
        let keywords = keyword_extractor::extract(query);
        if keywords.is_empty() {
            return Err(ServiceError::ValidationError(
                "Could not understand the query".to_string(),
            ));
        }

        let inner = self.inner.lock().unwrap();
        for item in inner.items.iter().rev() {
            let name = item.item_name.to_lowercase();
            for keyword in &keywords {
                if name.contains(keyword.as_str()) {
                    return Ok(item.clone());
                }
            }
        }

        Err(ServiceError::NotFound("Item not found".to_string()))
    }

    /// Remove an item by ID; the backing image file is removed best-effort.
    pub async fn delete(&self, id: u64) -> Result<(), ServiceError> {
        let removed = {
            let mut inner = self.inner.lock().unwrap();
            let position = inner.items.iter().position(|item| item.id == id);
            match position {
                Some(index) => inner.items.remove(index),
                None => return Err(ServiceError::NotFound("Item not found".to_string())),
            }
        };

        if let Some(path) = removed.image_path {
            if let Err(err) = tokio::fs::remove_file(&path).await {
                warn!(%path, %err, "failed to remove item image, continuing");
            }
        }

        info!(id, "item deleted");
        Ok(())
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
