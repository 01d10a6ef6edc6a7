//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    auth, bookings, buildings, cupboards, facilities, health, maintenance, resource_types,
    resources, shelves, users,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roomery API",
        version = "1.0.0",
        description = "Facility Resource Booking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::register,
        auth::login,
        // Buildings
        buildings::list_buildings,
        buildings::get_building,
        buildings::create_building,
        buildings::update_building,
        buildings::delete_building,
        // Resource types
        resource_types::list_resource_types,
        resource_types::get_resource_type,
        resource_types::create_resource_type,
        resource_types::update_resource_type,
        resource_types::delete_resource_type,
        // Resources
        resources::list_resources,
        resources::get_resource,
        resources::create_resource,
        resources::update_resource,
        resources::delete_resource,
        // Cupboards
        cupboards::list_cupboards,
        cupboards::get_cupboards_by_resource,
        cupboards::create_cupboard,
        cupboards::update_cupboard,
        cupboards::delete_cupboard,
        // Shelves
        shelves::list_shelves,
        shelves::get_shelves_by_cupboard,
        shelves::create_shelf,
        shelves::update_shelf,
        shelves::delete_shelf,
        // Facilities
        facilities::list_facilities,
        facilities::get_facilities_by_resource,
        facilities::create_facility,
        facilities::update_facility,
        facilities::delete_facility,
        // Maintenance
        maintenance::list_maintenance,
        maintenance::get_maintenance_by_resource,
        maintenance::create_maintenance,
        maintenance::update_maintenance_status,
        maintenance::delete_maintenance,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::change_password,
        users::delete_user,
        // Bookings
        bookings::list_bookings,
        bookings::get_booking,
        bookings::get_user_bookings,
        bookings::create_booking,
        bookings::update_booking_status,
        bookings::delete_booking,
    ),
    components(
        schemas(
            // Buildings
            crate::models::building::Building,
            crate::models::building::CreateBuilding,
            crate::models::building::UpdateBuilding,
            // Resource types
            crate::models::resource_type::ResourceType,
            crate::models::resource_type::CreateResourceType,
            crate::models::resource_type::UpdateResourceType,
            // Resources
            crate::models::resource::Resource,
            crate::models::resource::CreateResource,
            crate::models::resource::UpdateResource,
            // Cupboards
            crate::models::cupboard::Cupboard,
            crate::models::cupboard::CreateCupboard,
            crate::models::cupboard::UpdateCupboard,
            // Shelves
            crate::models::shelf::Shelf,
            crate::models::shelf::CreateShelf,
            crate::models::shelf::UpdateShelf,
            // Facilities
            crate::models::facility::Facility,
            crate::models::facility::CreateFacility,
            crate::models::facility::UpdateFacility,
            // Maintenance
            crate::models::maintenance::Maintenance,
            crate::models::maintenance::CreateMaintenance,
            crate::models::maintenance::UpdateMaintenanceStatus,
            // Users
            crate::models::user::User,
            crate::models::user::RegisterUser,
            crate::models::user::LoginUser,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            crate::models::user::ChangePassword,
            users::MessageResponse,
            // Bookings
            crate::models::booking::Booking,
            crate::models::booking::BookingStatus,
            crate::models::booking::CreateBooking,
            crate::models::booking::UpdateBookingStatus,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Registration and login"),
        (name = "buildings", description = "Building management"),
        (name = "resource-types", description = "Resource type management"),
        (name = "resources", description = "Resource management"),
        (name = "cupboards", description = "Cupboard management"),
        (name = "shelves", description = "Shelf management"),
        (name = "facilities", description = "Facility management"),
        (name = "maintenance", description = "Maintenance tickets"),
        (name = "users", description = "User management"),
        (name = "bookings", description = "Booking workflow")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
