//! User model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// User record. The password hash never serializes out.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Role label, uppercased on registration (e.g. STUDENT, STAFF, ADMIN)
    pub role: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterUser {
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub password: String,
    /// Defaults to STUDENT when absent
    pub role: Option<String>,
}

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginUser {
    pub email: String,
    pub password: String,
}

/// Create user request (admin-side; same shape as registration)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub password: String,
    pub role: Option<String>,
}

/// Update user request. Password is rehashed only when provided.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub role: String,
    pub password: Option<String>,
}

/// Change password request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangePassword {
    pub current_password: String,
    pub new_password: String,
}
