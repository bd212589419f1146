//! Voyagera Server - Tour Booking Management System
//!
//! A Rust REST API server for managing tourist booking records.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use mongodb::{bson::doc, Client};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use voyagera_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("voyagera_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Voyagera Server v{}", env!("CARGO_PKG_VERSION"));

    // Connect to MongoDB
    let client = Client::with_uri_str(&config.database.url)
        .await
        .expect("Failed to create MongoDB client");
    let db = client.database(&config.database.database);

    db.run_command(doc! { "ping": 1 }, None)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(&db);
    let services = Services::new(repository, config.uploads.clone());

    // The images directory must exist before the first upload arrives
    services.uploads.ensure_destination().await?;

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(server_host.parse().expect("Invalid host address"), server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Tourist records
        .route("/tourists", get(api::tourists::list_tourists))
        .route("/tourists", post(api::tourists::create_tourist))
        .route("/tourists/gallery", patch(api::tourists::update_gallery))
        .route("/tourists/:id", get(api::tourists::get_tourist))
        .route("/tourists/:id", patch(api::tourists::update_tourist))
        .route("/tourists/:id", delete(api::tourists::delete_tourist))
        .route("/tourists/:id/comment", patch(api::tourists::update_comment))
        // Uploads
        .route("/tourists/upload", post(api::uploads::upload_image))
        .route("/tourists/upload", delete(api::uploads::delete_image))
        .route("/tourists/uploads", post(api::uploads::upload_images))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
