//! User data models and DTOs.
//!
//! # Core Types
//!
//! - [`User`] - Base user entity from the database (password never included)
//! - [`UserRole`] - The fixed role assigned at registration
//!
//! # Request DTOs
//!
//! - [`UpdateProfileDto`] - Update the caller's own profile (name only)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Role assigned to a user at registration.
///
/// The role is immutable for the lifetime of the account; there is no
/// role-change endpoint.
#[derive(Serialize, Deserialize, sqlx::Type, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Teacher,
    Student,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Teacher => "teacher",
            UserRole::Student => "student",
        }
    }
}

/// A user in the system.
///
/// The password hash is stored in the database but deliberately absent
/// from this struct so it can never leak through serialization.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for updating the caller's own profile.
///
/// Email, password, and role are not updatable through this DTO.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileDto {
    #[validate(length(min = 1))]
    pub first_name: Option<String>,
    #[validate(length(min = 1))]
    pub last_name: Option<String>,
}
