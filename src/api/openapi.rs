//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, tourists, uploads};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Voyagera API",
        version = "1.0.0",
        description = "Tour Booking Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Tourists
        tourists::list_tourists,
        tourists::get_tourist,
        tourists::create_tourist,
        tourists::update_tourist,
        tourists::update_comment,
        tourists::update_gallery,
        tourists::delete_tourist,
        // Uploads
        uploads::upload_image,
        uploads::upload_images,
        uploads::delete_image,
    ),
    components(
        schemas(
            // Tourists
            crate::models::tourist::Tourist,
            crate::models::tourist::TouristShort,
            crate::models::tourist::CreateTourist,
            crate::models::tourist::UpdateTourist,
            crate::models::tourist::UpdateComment,
            crate::models::tourist::UpdateGalleryRequest,
            crate::models::tourist::GalleryInfo,
            tourists::TouristResponse,
            tourists::TouristsResponse,
            tourists::MessageResponse,
            // Uploads
            crate::models::upload::UploadedFile,
            uploads::UploadResponse,
            uploads::UploadsResponse,
            uploads::DeleteImageRequest,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "tourists", description = "Tourist booking record management"),
        (name = "uploads", description = "Image upload reception")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
