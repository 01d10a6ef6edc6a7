//! User management service: registration, login and account CRUD

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{ChangePassword, CreateUser, LoginUser, RegisterUser, UpdateUser, User},
    repository::Repository,
};

const DEFAULT_ROLE: &str = "STUDENT";

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.repository.users.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }

    /// Register a new account. Fails when the email is already taken.
    pub async fn register(&self, data: &RegisterUser) -> AppResult<User> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if self.repository.users.email_exists(&data.email, None).await? {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let role = normalize_role(data.role.as_deref());
        let hash = hash_password(&data.password)?;

        self.repository
            .users
            .create(&data.name, &data.email, &role, &hash)
            .await
    }

    /// Authenticate by email and password, returning the account
    pub async fn login(&self, data: &LoginUser) -> AppResult<User> {
        let user = self
            .repository
            .users
            .get_by_email(&data.email)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("User not found. Please register first.".to_string())
            })?;

        if !verify_password(&user.password_hash, &data.password)? {
            return Err(AppError::Authentication("Invalid password".to_string()));
        }

        Ok(user)
    }

    /// Change a user's password after verifying the current one
    pub async fn change_password(&self, id: i32, data: &ChangePassword) -> AppResult<()> {
        let user = self.repository.users.get_by_id(id).await?;

        if !verify_password(&user.password_hash, &data.current_password)? {
            return Err(AppError::Authentication(
                "Current password is incorrect".to_string(),
            ));
        }

        let hash = hash_password(&data.new_password)?;
        self.repository.users.update_password_hash(id, &hash).await
    }

    /// Create an account (admin-side; same rules as registration)
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if self.repository.users.email_exists(&data.email, None).await? {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let role = normalize_role(data.role.as_deref());
        let hash = hash_password(&data.password)?;

        self.repository
            .users
            .create(&data.name, &data.email, &role, &hash)
            .await
    }

    /// Update name, role and (guarded by uniqueness) email; an optional new
    /// password is rehashed
    pub async fn update(&self, id: i32, data: &UpdateUser) -> AppResult<User> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let existing = self.repository.users.get_by_id(id).await?;

        if !existing.email.eq_ignore_ascii_case(&data.email)
            && self.repository.users.email_exists(&data.email, Some(id)).await?
        {
            return Err(AppError::Conflict("New email is already in use".to_string()));
        }

        let user = self
            .repository
            .users
            .update(id, &data.name, &data.email, &data.role)
            .await?;

        if let Some(password) = data.password.as_deref().filter(|p| !p.is_empty()) {
            let hash = hash_password(password)?;
            self.repository.users.update_password_hash(id, &hash).await?;
        }

        Ok(user)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.users.delete(id).await
    }
}

fn normalize_role(role: Option<&str>) -> String {
    match role {
        Some(r) if !r.is_empty() => r.to_uppercase(),
        _ => DEFAULT_ROLE.to_string(),
    }
}

fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("Stored password hash is invalid: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_defaults_to_student_and_uppercases() {
        assert_eq!(normalize_role(None), "STUDENT");
        assert_eq!(normalize_role(Some("")), "STUDENT");
        assert_eq!(normalize_role(Some("staff")), "STAFF");
        assert_eq!(normalize_role(Some("Admin")), "ADMIN");
    }

    #[test]
    fn password_hash_round_trip() {
        let hash = hash_password("hunter2").unwrap();
        assert_ne!(hash, "hunter2");
        assert!(verify_password(&hash, "hunter2").unwrap());
        assert!(!verify_password(&hash, "hunter3").unwrap());
    }
}
