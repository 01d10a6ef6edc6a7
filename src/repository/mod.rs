//! Repository layer for database operations

pub mod bookings;
pub mod buildings;
pub mod cupboards;
pub mod facilities;
pub mod maintenance;
pub mod resource_types;
pub mod resources;
pub mod shelves;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub buildings: buildings::BuildingsRepository,
    pub resource_types: resource_types::ResourceTypesRepository,
    pub resources: resources::ResourcesRepository,
    pub cupboards: cupboards::CupboardsRepository,
    pub shelves: shelves::ShelvesRepository,
    pub facilities: facilities::FacilitiesRepository,
    pub maintenance: maintenance::MaintenanceRepository,
    pub users: users::UsersRepository,
    pub bookings: bookings::BookingsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            buildings: buildings::BuildingsRepository::new(pool.clone()),
            resource_types: resource_types::ResourceTypesRepository::new(pool.clone()),
            resources: resources::ResourcesRepository::new(pool.clone()),
            cupboards: cupboards::CupboardsRepository::new(pool.clone()),
            shelves: shelves::ShelvesRepository::new(pool.clone()),
            facilities: facilities::FacilitiesRepository::new(pool.clone()),
            maintenance: maintenance::MaintenanceRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            bookings: bookings::BookingsRepository::new(pool.clone()),
            pool,
        }
    }
}
