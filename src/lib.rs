//! Roomery Facility Resource Booking Server
//!
//! A REST JSON API for managing buildings, rooms and storage hierarchies,
//! and for booking them through an approval workflow with conflict
//! detection.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
