use std::collections::HashMap;
use std::path::Path;

use axum::extract::multipart::{Multipart, MultipartError};
use chrono::Utc;
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

/// Errors from the multipart upload receiver
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("unexpected file field '{0}'")]
    UnexpectedField(String),

    #[error("too many files for field '{field}'")]
    TooManyFiles { field: &'static str },

    #[error(transparent)]
    Multipart(#[from] MultipartError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Declares an accepted file field and its maximum cardinality for a route.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub max_count: usize,
}

/// A multipart form after ingestion: plain text fields, plus the stored path
/// for every accepted file (relative, forward-slash form, e.g. `uploads/<name>`).
#[derive(Debug, Default)]
pub struct ReceivedForm {
    text: HashMap<String, String>,
    files: HashMap<String, Vec<String>>,
}

impl ReceivedForm {
    /// Text fields as a JSON object, ready to merge uploaded paths into.
    pub fn text_value(&self) -> Value {
        let mut map = Map::new();
        for (key, value) in &self.text {
            map.insert(key.clone(), Value::String(value.clone()));
        }
        Value::Object(map)
    }

    /// Stored paths for a multi-file field (empty if none were sent).
    pub fn file_paths(&self, name: &str) -> &[String] {
        self.files.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Stored path for a single-file field. Absent is not an error: the field
    /// is optional at the protocol layer even where the entity requires it.
    pub fn first_file(&self, name: &str) -> Option<&str> {
        self.files.get(name).and_then(|paths| paths.first()).map(String::as_str)
    }
}

/// Consume a multipart stream, writing each file under `upload_dir` with a
/// collision-resistant name and collecting text fields as-is.
///
/// Files are written synchronously before the caller proceeds. Nothing is
/// cleaned up on a later failure; a file written before an insert fails is
/// orphaned on disk.
pub async fn receive(
    mut multipart: Multipart,
    upload_dir: &Path,
    specs: &[FieldSpec],
) -> Result<ReceivedForm, UploadError> {
    let mut form = ReceivedForm::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        let Some(original) = field.file_name().map(str::to_string) else {
            // No filename means a plain text field.
            let value = field.text().await?;
            form.text.insert(name, value);
            continue;
        };

        let spec = specs
            .iter()
            .find(|spec| spec.name == name)
            .ok_or_else(|| UploadError::UnexpectedField(name.clone()))?;

        let stored = form.files.entry(name.clone()).or_default();
        if stored.len() >= spec.max_count {
            return Err(UploadError::TooManyFiles { field: spec.name });
        }

        let data = field.bytes().await?;
        let file_name = unique_file_name(&original);

        tokio::fs::create_dir_all(upload_dir).await?;
        tokio::fs::write(upload_dir.join(&file_name), &data).await?;
        tracing::debug!(field = %name, file = %file_name, bytes = data.len(), "stored uploaded file");

        stored.push(normalize_path(Path::new("uploads").join(&file_name)));
    }

    Ok(form)
}

/// Millisecond timestamp plus a random suffix, preserving the original
/// extension. Concurrent uploads never collide on the same path.
fn unique_file_name(original: &str) -> String {
    let extension = Path::new(original)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    format!(
        "{}-{}{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple(),
        extension
    )
}

/// Records store forward-slash relative paths regardless of the host OS.
fn normalize_path(path: impl AsRef<Path>) -> String {
    path.as_ref().to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_file_name_preserves_extension() {
        let name = unique_file_name("screenshot.PNG");
        assert!(name.ends_with(".PNG"));
    }

    #[test]
    fn unique_file_name_handles_missing_extension() {
        let name = unique_file_name("README");
        assert!(!name.contains('.'));
        assert!(!name.is_empty());
    }

    #[test]
    fn unique_file_name_never_repeats() {
        let a = unique_file_name("a.jpg");
        let b = unique_file_name("a.jpg");
        assert_ne!(a, b);
    }

    #[test]
    fn normalize_path_converts_backslashes() {
        assert_eq!(normalize_path(r"uploads\123-abc.png"), "uploads/123-abc.png");
        assert_eq!(normalize_path("uploads/123-abc.png"), "uploads/123-abc.png");
    }

    #[test]
    fn absent_single_file_field_is_none() {
        let form = ReceivedForm::default();
        assert_eq!(form.first_file("coverImage"), None);
        assert!(form.file_paths("images").is_empty());
    }
}
