//! Data models for Roomery

pub mod booking;
pub mod building;
pub mod cupboard;
pub mod facility;
pub mod maintenance;
pub mod resource;
pub mod resource_type;
pub mod shelf;
pub mod user;

// Re-export commonly used types
pub use booking::{Booking, BookingStatus};
pub use building::Building;
pub use cupboard::Cupboard;
pub use facility::Facility;
pub use maintenance::Maintenance;
pub use resource::Resource;
pub use resource_type::ResourceType;
pub use shelf::Shelf;
pub use user::User;
