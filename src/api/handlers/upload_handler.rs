//! File upload handlers.
//!
//! Uploads are read whole into memory before the size is computed; there is
//! no streaming.

use axum::{
    extract::multipart::{Multipart, MultipartError},
    response::Json,
    routing::post,
    Router,
};
use serde::Serialize;

use crate::api::AppState;
use crate::errors::{AppError, AppResult};

/// Create upload routes (merged at the router root)
pub fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/post-image", post(post_image))
        .route("/post-images", post(post_images))
}

/// What the API reports about one uploaded file.
#[derive(Debug, Serialize)]
pub struct FileDescriptor {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    /// Size in kilobytes, rounded to one decimal
    pub size_kb: f64,
}

impl FileDescriptor {
    fn new(filename: Option<String>, content_type: Option<String>, bytes: usize) -> Self {
        Self {
            filename,
            content_type,
            size_kb: round_kb(bytes),
        }
    }
}

fn round_kb(bytes: usize) -> f64 {
    (bytes as f64 / 1024.0 * 10.0).round() / 10.0
}

fn upload_error(e: MultipartError) -> AppError {
    AppError::validation("file", "upload_error", e.body_text())
}

/// Accept a single uploaded file and describe it
pub async fn post_image(mut multipart: Multipart) -> AppResult<Json<FileDescriptor>> {
    let field = multipart
        .next_field()
        .await
        .map_err(upload_error)?
        .ok_or_else(|| AppError::validation("image", "required", "image file is required"))?;

    let filename = field.file_name().map(str::to_string);
    let content_type = field.content_type().map(str::to_string);
    let data = field.bytes().await.map_err(upload_error)?;

    Ok(Json(FileDescriptor::new(filename, content_type, data.len())))
}

/// Accept a list of uploaded files and describe each one
pub async fn post_images(mut multipart: Multipart) -> AppResult<Json<Vec<FileDescriptor>>> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(upload_error)?;
        files.push(FileDescriptor::new(filename, content_type, data.len()));
    }

    if files.is_empty() {
        return Err(AppError::validation(
            "images",
            "required",
            "at least one image file is required",
        ));
    }

    Ok(Json(files))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_rounds_to_one_decimal() {
        // 1536 bytes = 1.5 kB exactly
        assert_eq!(round_kb(1536), 1.5);
        // 1000 bytes = 0.9765625 kB, rounds to 1.0
        assert_eq!(round_kb(1000), 1.0);
        assert_eq!(round_kb(0), 0.0);
    }
}
