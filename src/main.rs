//! Roomery Server - Facility Resource Booking
//!
//! REST API server for booking rooms, shelves and other facility resources.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roomery_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("roomery_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Roomery Server v{}", env!("CARGO_PKG_VERSION"));

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

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

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
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Authentication
        .route("/auth/register", post(api::auth::register))
        .route("/auth/login", post(api::auth::login))
        // Buildings
        .route("/buildings", get(api::buildings::list_buildings))
        .route("/buildings", post(api::buildings::create_building))
        .route("/buildings/:id", get(api::buildings::get_building))
        .route("/buildings/:id", put(api::buildings::update_building))
        .route("/buildings/:id", delete(api::buildings::delete_building))
        // Resource types
        .route("/resource-types", get(api::resource_types::list_resource_types))
        .route("/resource-types", post(api::resource_types::create_resource_type))
        .route("/resource-types/:id", get(api::resource_types::get_resource_type))
        .route("/resource-types/:id", put(api::resource_types::update_resource_type))
        .route("/resource-types/:id", delete(api::resource_types::delete_resource_type))
        // Resources (scoped listings nest under the owning resource)
        .route("/resources", get(api::resources::list_resources))
        .route("/resources", post(api::resources::create_resource))
        .route("/resources/:id", get(api::resources::get_resource))
        .route("/resources/:id", put(api::resources::update_resource))
        .route("/resources/:id", delete(api::resources::delete_resource))
        .route("/resources/:id/cupboards", get(api::cupboards::get_cupboards_by_resource))
        .route("/resources/:id/facilities", get(api::facilities::get_facilities_by_resource))
        .route("/resources/:id/maintenance", get(api::maintenance::get_maintenance_by_resource))
        // Cupboards
        .route("/cupboards", get(api::cupboards::list_cupboards))
        .route("/cupboards", post(api::cupboards::create_cupboard))
        .route("/cupboards/:id", put(api::cupboards::update_cupboard))
        .route("/cupboards/:id", delete(api::cupboards::delete_cupboard))
        .route("/cupboards/:id/shelves", get(api::shelves::get_shelves_by_cupboard))
        // Shelves
        .route("/shelves", get(api::shelves::list_shelves))
        .route("/shelves", post(api::shelves::create_shelf))
        .route("/shelves/:id", put(api::shelves::update_shelf))
        .route("/shelves/:id", delete(api::shelves::delete_shelf))
        // Facilities
        .route("/facilities", get(api::facilities::list_facilities))
        .route("/facilities", post(api::facilities::create_facility))
        .route("/facilities/:id", put(api::facilities::update_facility))
        .route("/facilities/:id", delete(api::facilities::delete_facility))
        // Maintenance
        .route("/maintenance", get(api::maintenance::list_maintenance))
        .route("/maintenance", post(api::maintenance::create_maintenance))
        .route("/maintenance/:id/status", put(api::maintenance::update_maintenance_status))
        .route("/maintenance/:id", delete(api::maintenance::delete_maintenance))
        // Users
        .route("/users", get(api::users::list_users))
        .route("/users", post(api::users::create_user))
        .route("/users/:id", get(api::users::get_user))
        .route("/users/:id", put(api::users::update_user))
        .route("/users/:id", delete(api::users::delete_user))
        .route("/users/:id/change-password", patch(api::users::change_password))
        .route("/users/:id/bookings", get(api::bookings::get_user_bookings))
        // Bookings (list filters by ?status=, e.g. ?status=PENDING)
        .route("/bookings", get(api::bookings::list_bookings))
        .route("/bookings", post(api::bookings::create_booking))
        .route("/bookings/:id", get(api::bookings::get_booking))
        .route("/bookings/:id/status", put(api::bookings::update_booking_status))
        .route("/bookings/:id", delete(api::bookings::delete_booking))
        .with_state(state.clone());

    // Health endpoints stay outside the /api prefix
    let health = Router::new()
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check));

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api", api)
        .merge(health)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
