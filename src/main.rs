//! GearTrack Server - Equipment Check-In/Check-Out Tracker
//!
//! REST API server for event-production inventory.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use geartrack_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("geartrack_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting GearTrack Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;
    let photo_dir = config.storage.photo_dir.clone();

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.storage.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state, &photo_dir);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState, photo_dir: &str) -> Router {
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
        // Scan (check in / check out)
        .route("/scan", post(api::scan::process_scan))
        // Equipment
        .route("/equipment", get(api::equipment::list_equipment))
        .route("/equipment", post(api::equipment::create_equipment))
        .route("/equipment/:id", get(api::equipment::get_equipment))
        .route("/equipment/:id", put(api::equipment::update_equipment))
        .route("/equipment/:id", delete(api::equipment::delete_equipment))
        .route("/equipment/:id/photo", post(api::equipment::upload_photo))
        // Events
        .route("/events", get(api::events::list_events))
        .route("/events", post(api::events::create_event))
        .route("/events/:id", get(api::events::get_event))
        .route("/events/:id", put(api::events::update_event))
        .route("/events/:id", delete(api::events::delete_event))
        // Event checklists
        .route("/events/:id/checklist", post(api::events::add_checklist_entry))
        .route(
            "/events/:id/checklist/:entry_id",
            put(api::events::update_checklist_entry),
        )
        .route(
            "/events/:id/checklist/:entry_id",
            delete(api::events::remove_checklist_entry),
        )
        .route("/events/:id/apply-template", post(api::events::apply_template))
        // Templates
        .route("/templates", get(api::templates::list_templates))
        .route("/templates", post(api::templates::create_template))
        .route("/templates/:id", get(api::templates::get_template))
        .route("/templates/:id", delete(api::templates::delete_template))
        // Categories
        .route("/categories", get(api::categories::list_categories))
        .route("/categories", post(api::categories::create_category))
        .route("/categories/:id", delete(api::categories::delete_category))
        // History
        .route("/history", get(api::history::list_history))
        // Export / import
        .route("/export", get(api::transfer::export_data))
        .route("/import", post(api::transfer::import_data))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .nest_service("/photos", ServeDir::new(photo_dir))
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
