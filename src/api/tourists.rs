//! Tourist record endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::tourist::{
        CreateTourist, Tourist, TouristShort, UpdateComment, UpdateGalleryRequest, UpdateTourist,
    },
};

use super::validate_payload;

/// Single-record response envelope
#[derive(Serialize, ToSchema)]
pub struct TouristResponse {
    pub tourist: Tourist,
}

/// List response envelope
#[derive(Serialize, ToSchema)]
pub struct TouristsResponse {
    pub tourists: Vec<TouristShort>,
}

/// Acknowledgment envelope
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Get a tourist record by id
#[utoipa::path(
    get,
    path = "/tourists/{id}",
    tag = "tourists",
    params(
        ("id" = String, Path, description = "Tourist record id")
    ),
    responses(
        (status = 200, description = "Tourist record", body = TouristResponse),
        (status = 404, description = "Tourist not found")
    )
)]
pub async fn get_tourist(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<TouristResponse>> {
    let tourist = state.services.tourists.get(&id).await?;
    Ok(Json(TouristResponse { tourist }))
}

/// List all tourist records (without the `touristCode` secret)
#[utoipa::path(
    get,
    path = "/tourists",
    tag = "tourists",
    responses(
        (status = 200, description = "List of tourist records", body = TouristsResponse)
    )
)]
pub async fn list_tourists(
    State(state): State<crate::AppState>,
) -> AppResult<Json<TouristsResponse>> {
    let tourists = state.services.tourists.list().await?;
    Ok(Json(TouristsResponse { tourists }))
}

/// Create a new tourist record. The gallery starts empty regardless of input.
#[utoipa::path(
    post,
    path = "/tourists",
    tag = "tourists",
    request_body = CreateTourist,
    responses(
        (status = 201, description = "Tourist created", body = TouristResponse),
        (status = 422, description = "Invalid input")
    )
)]
pub async fn create_tourist(
    State(state): State<crate::AppState>,
    Json(payload): Json<CreateTourist>,
) -> AppResult<(StatusCode, Json<TouristResponse>)> {
    validate_payload(&payload)?;

    let tourist = state.services.tourists.create(payload).await?;
    Ok((StatusCode::CREATED, Json(TouristResponse { tourist })))
}

/// Update the destination fields of a tourist record
#[utoipa::path(
    patch,
    path = "/tourists/{id}",
    tag = "tourists",
    params(
        ("id" = String, Path, description = "Tourist record id")
    ),
    request_body = UpdateTourist,
    responses(
        (status = 200, description = "Tourist updated", body = TouristResponse),
        (status = 404, description = "Tourist not found"),
        (status = 422, description = "Invalid input")
    )
)]
pub async fn update_tourist(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTourist>,
) -> AppResult<Json<TouristResponse>> {
    validate_payload(&payload)?;

    let tourist = state.services.tourists.update_destination(&id, payload).await?;
    Ok(Json(TouristResponse { tourist }))
}

/// Update the comment and image fields, gated by the record's code
#[utoipa::path(
    patch,
    path = "/tourists/{id}/comment",
    tag = "tourists",
    params(
        ("id" = String, Path, description = "Tourist record id")
    ),
    request_body = UpdateComment,
    responses(
        (status = 200, description = "Comment updated", body = TouristResponse),
        (status = 404, description = "Tourist not found"),
        (status = 422, description = "Invalid input or code mismatch")
    )
)]
pub async fn update_comment(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateComment>,
) -> AppResult<Json<TouristResponse>> {
    validate_payload(&payload)?;

    let tourist = state.services.tourists.update_comment(&id, payload).await?;
    Ok(Json(TouristResponse { tourist }))
}

/// Replace the gallery of the record named in the request body
#[utoipa::path(
    patch,
    path = "/tourists/gallery",
    tag = "tourists",
    request_body = UpdateGalleryRequest,
    responses(
        (status = 200, description = "Gallery replaced", body = TouristResponse),
        (status = 404, description = "Tourist not found"),
        (status = 422, description = "Invalid input")
    )
)]
pub async fn update_gallery(
    State(state): State<crate::AppState>,
    Json(payload): Json<UpdateGalleryRequest>,
) -> AppResult<Json<TouristResponse>> {
    validate_payload(&payload)?;

    let tourist = state.services.tourists.update_gallery(payload.tourist_info).await?;
    Ok(Json(TouristResponse { tourist }))
}

/// Delete a tourist record. Deleting an unknown id still succeeds.
#[utoipa::path(
    delete,
    path = "/tourists/{id}",
    tag = "tourists",
    params(
        ("id" = String, Path, description = "Tourist record id")
    ),
    responses(
        (status = 200, description = "Tourist deleted", body = MessageResponse)
    )
)]
pub async fn delete_tourist(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.tourists.delete(&id).await?;
    Ok(Json(MessageResponse {
        message: "Deleted tourist.".to_string(),
    }))
}
