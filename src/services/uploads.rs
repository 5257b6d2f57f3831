use crate::errors::ServiceError;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::info;

/// Image extensions accepted for upload, matched case-insensitively.
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Persists uploaded images under a configurable directory with
/// collision-resistant, timestamp-prefixed names.
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the upload directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), ServiceError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Whether the client filename carries an accepted image extension.
    pub fn is_allowed(filename: &str) -> bool {
        filename
            .rsplit_once('.')
            .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            .unwrap_or(false)
    }

    /// Write the upload to disk and return its stored path.
    ///
    /// The stored name is `{prefix}{millis}_{sanitized original}`, so two
    /// uploads of the same file never collide within a millisecond and the
    /// original name survives for the object-hint heuristic and the user.
    pub async fn save(
        &self,
        original_name: &str,
        data: &[u8],
        prefix: Option<&str>,
    ) -> Result<String, ServiceError> {
        let stored_name = format!(
            "{}{}_{}",
            prefix.unwrap_or(""),
            Utc::now().timestamp_millis(),
            sanitize(original_name)
        );
        let path = self.dir.join(&stored_name);
        tokio::fs::write(&path, data).await?;

        info!(path = %path.display(), bytes = data.len(), "stored upload");
        Ok(path.to_string_lossy().into_owned())
    }
}

/// Reduce a client-supplied filename to a safe flat name: only ASCII
/// alphanumerics, dots, dashes and underscores survive, and leading dots
/// are dropped so the result can never be a hidden file or `..`.
pub fn sanitize(filename: &str) -> String {
    let kept: String = filename
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();
    kept.trim_start_matches('.').to_string()
}
