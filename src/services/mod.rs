//! Business logic services

pub mod bookings;
pub mod buildings;
pub mod cupboards;
pub mod facilities;
pub mod maintenance;
pub mod resource_types;
pub mod resources;
pub mod shelves;
pub mod users;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub buildings: buildings::BuildingsService,
    pub resource_types: resource_types::ResourceTypesService,
    pub resources: resources::ResourcesService,
    pub cupboards: cupboards::CupboardsService,
    pub shelves: shelves::ShelvesService,
    pub facilities: facilities::FacilitiesService,
    pub maintenance: maintenance::MaintenanceService,
    pub users: users::UsersService,
    pub bookings: bookings::BookingsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            buildings: buildings::BuildingsService::new(repository.clone()),
            resource_types: resource_types::ResourceTypesService::new(repository.clone()),
            resources: resources::ResourcesService::new(repository.clone()),
            cupboards: cupboards::CupboardsService::new(repository.clone()),
            shelves: shelves::ShelvesService::new(repository.clone()),
            facilities: facilities::FacilitiesService::new(repository.clone()),
            maintenance: maintenance::MaintenanceService::new(repository.clone()),
            users: users::UsersService::new(repository.clone()),
            bookings: bookings::BookingsService::new(repository),
        }
    }
}
