//! Image upload reception and discard endpoints.
//!
//! These endpoints only receive files and echo back the stored
//! metadata; linking a stored path into a tourist record goes through
//! the record update endpoints.

use axum::{extract::State, Json};
use axum_extra::extract::Multipart;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::UploadedFile,
};

use super::{tourists::MessageResponse, validate_payload};

/// Single-upload response envelope
#[derive(Serialize, ToSchema)]
pub struct UploadResponse {
    pub message: String,
    pub data: UploadedFile,
}

/// Multi-upload response envelope
#[derive(Serialize, ToSchema)]
pub struct UploadsResponse {
    pub message: String,
    pub data: Vec<UploadedFile>,
}

/// Path of the uploaded file to discard
#[derive(Deserialize, Validate, ToSchema)]
pub struct DeleteImageRequest {
    #[validate(length(min = 1, message = "image must not be empty"))]
    pub image: String,
}

/// Receive a single image file
#[utoipa::path(
    post,
    path = "/tourists/upload",
    tag = "uploads",
    request_body(content = String, content_type = "multipart/form-data", description = "One image file (png, jpeg or jpg)"),
    responses(
        (status = 200, description = "File stored", body = UploadResponse),
        (status = 422, description = "Unsupported file type")
    )
)]
pub async fn upload_image(
    State(state): State<crate::AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    while let Some(field) = next_field(&mut multipart).await? {
        let Some(content_type) = field.content_type().map(str::to_string) else {
            // Not a file part
            continue;
        };
        let original_name = field.file_name().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?;

        let stored = state
            .services
            .uploads
            .store(original_name, &content_type, data)
            .await?;
        return Ok(Json(UploadResponse {
            message: "data received".to_string(),
            data: stored,
        }));
    }

    Err(AppError::BadRequest("No file supplied".to_string()))
}

/// Receive up to `uploads.max_files` image files in one request
#[utoipa::path(
    post,
    path = "/tourists/uploads",
    tag = "uploads",
    request_body(content = String, content_type = "multipart/form-data", description = "Up to 16 image files (png, jpeg or jpg)"),
    responses(
        (status = 200, description = "Files stored", body = UploadsResponse),
        (status = 422, description = "Unsupported file type or too many files")
    )
)]
pub async fn upload_images(
    State(state): State<crate::AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadsResponse>> {
    let max_files = state.services.uploads.max_files();
    let mut stored = Vec::new();

    while let Some(field) = next_field(&mut multipart).await? {
        let Some(content_type) = field.content_type().map(str::to_string) else {
            continue;
        };
        if stored.len() >= max_files {
            return Err(AppError::Validation(format!(
                "At most {} files are accepted per request",
                max_files
            )));
        }
        let original_name = field.file_name().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?;

        stored.push(
            state
                .services
                .uploads
                .store(original_name, &content_type, data)
                .await?,
        );
    }

    Ok(Json(UploadsResponse {
        message: "data received".to_string(),
        data: stored,
    }))
}

/// Discard a previously uploaded file. Best-effort: the caller always
/// gets a success acknowledgment.
#[utoipa::path(
    delete,
    path = "/tourists/upload",
    tag = "uploads",
    request_body = DeleteImageRequest,
    responses(
        (status = 200, description = "Acknowledged", body = MessageResponse)
    )
)]
pub async fn delete_image(
    State(state): State<crate::AppState>,
    Json(payload): Json<DeleteImageRequest>,
) -> AppResult<Json<MessageResponse>> {
    validate_payload(&payload)?;

    state.services.uploads.discard(&payload.image).await;
    Ok(Json(MessageResponse {
        message: "Deleted image.".to_string(),
    }))
}

async fn next_field(
    multipart: &mut Multipart,
) -> AppResult<Option<axum_extra::extract::multipart::Field>> {
    multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))
}
