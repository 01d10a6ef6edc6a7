//! API handlers for Roomery REST endpoints

pub mod auth;
pub mod bookings;
pub mod buildings;
pub mod cupboards;
pub mod facilities;
pub mod health;
pub mod maintenance;
pub mod openapi;
pub mod resource_types;
pub mod resources;
pub mod shelves;
pub mod users;
