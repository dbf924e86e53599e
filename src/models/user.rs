// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'users' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    /// Unique email, used for login.
    pub email: String,

    /// Unique username.
    pub username: String,

    /// Display name.
    pub name: String,

    /// Argon2 password hash.
    /// Skipped during serialization to prevent leaking sensitive data.
    #[serde(skip)]
    pub password: String,

    /// Inactive users are refused by the authorization gate.
    pub active: bool,

    pub confirmed_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Represents the 'roles' table. Membership is the unordered 'roles_users'
/// relation; no core rule consults roles yet.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// The identity-relevant slice of a user, loaded for authorization checks.
#[derive(Debug, Clone)]
pub struct Principal {
    pub user_id: i64,
    pub active: bool,
    pub roles: Vec<String>,
}

/// DTO for creating a new user (Registration).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "Email must be a valid address"), length(max = 255))]
    pub email: String,

    #[validate(length(
        min = 3,
        max = 255,
        message = "Username length must be between 3 and 255 characters."
    ))]
    pub username: String,

    #[validate(length(max = 255))]
    #[serde(default)]
    pub name: String,

    #[validate(length(
        min = 4,
        max = 128,
        message = "Password length must be between 4 and 128 characters."
    ))]
    pub password: String,
}

/// DTO for user login.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 255))]
    pub email: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}
