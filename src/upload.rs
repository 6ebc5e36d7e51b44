//! Multipart handling for the upload endpoints (avatars, resumes, logos).
//!
//! Bodies arrive as raw bytes and go through multer; text fields and file
//! parts are split apart so handlers can treat a multipart request like a
//! form with attachments.

use std::collections::HashMap;
use std::path::Path;

use axum::http::HeaderMap;
use bytes::Bytes;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::FileRef;

pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedFile {
    /// Logo uploads only accept common image extensions.
    pub fn is_image(&self) -> bool {
        let lower = self.file_name.to_lowercase();
        ["jpg", "jpeg", "png", "gif"]
            .iter()
            .any(|ext| lower.ends_with(&format!(".{ext}")))
    }
}

#[derive(Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl MultipartForm {
    /// A text field, with empty values treated as absent.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    pub fn file(&self, name: &str) -> Option<&UploadedFile> {
        self.files.get(name)
    }
}

/// Parse a multipart/form-data body into text fields and file parts.
pub async fn parse(headers: &HeaderMap, body: Bytes) -> Result<MultipartForm, AppError> {
    let boundary = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| AppError::BadRequest("Expected multipart/form-data".to_string()))?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut form = MultipartForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or("unknown").to_string();

        if let Some(file_name) = field.file_name() {
            let file_name = sanitize_file_name(file_name);
            let content_type = field.content_type().map(|m| m.to_string());
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("File read error: {e}")))?;
            form.files.insert(
                name,
                UploadedFile {
                    file_name,
                    content_type,
                    data,
                },
            );
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(format!("Field read error: {e}")))?;
            form.fields.insert(name, value);
        }
    }

    Ok(form)
}

/// Persist an uploaded file under the upload directory and return its
/// reference. Names get a unique prefix so repeated uploads never collide.
pub async fn store(dir: &Path, file: &UploadedFile) -> Result<FileRef, AppError> {
    let name = format!("{}-{}", Uuid::now_v7().simple(), file.file_name);

    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to create upload dir: {e}")))?;
    tokio::fs::write(dir.join(&name), &file.data)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to store upload: {e}")))?;

    Ok(FileRef::Local(name))
}

/// Best-effort removal of a replaced local file. Remote references and
/// failures are left alone; a stale file on disk is not worth failing the
/// request over.
pub async fn remove(dir: &Path, file: &FileRef) {
    if let FileRef::Local(name) = file {
        if let Err(e) = tokio::fs::remove_file(dir.join(name)).await {
            tracing::warn!("Failed to remove replaced upload {name}: {e}");
        }
    }
}

/// Keep the base name only; uploaded names never pick the storage path.
fn sanitize_file_name(name: &str) -> String {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(name)
        .trim();
    if base.is_empty() {
        "file".to_string()
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> UploadedFile {
        UploadedFile {
            file_name: name.to_string(),
            content_type: None,
            data: Bytes::new(),
        }
    }

    #[test]
    fn image_extension_check() {
        assert!(file("logo.PNG").is_image());
        assert!(file("photo.jpeg").is_image());
        assert!(!file("resume.pdf").is_image());
        assert!(!file("nodots").is_image());
    }

    #[test]
    fn file_names_are_stripped_to_their_base() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\temp\\cv.pdf"), "cv.pdf");
        assert_eq!(sanitize_file_name("cv.pdf"), "cv.pdf");
        assert_eq!(sanitize_file_name("  "), "file");
    }
}
