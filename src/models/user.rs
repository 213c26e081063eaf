// src/models/user.rs
// DOCUMENTATION: User account data structures
// PURPOSE: Defines account models for authentication and owner scoping

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Represents a user account record from the database
/// DOCUMENTATION: This struct maps directly to the users table
/// Every domain record carries this user's id for owner scoping
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Login email, stored lowercase, unique
    pub email: String,

    /// Bcrypt password hash - never serialized to API consumers
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Display name
    pub name: String,

    /// Opaque API token presented via the X-Api-Token header
    #[serde(skip_serializing)]
    pub api_token: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Request DTO for POST /auth/login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Response DTO exposing only public account fields
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Response DTO for successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// API token for subsequent requests
    pub token: String,
    pub user: UserResponse,
}

impl User {
    /// Convert User to UserResponse for API
    /// DOCUMENTATION: Strips credential material from the account record
    pub fn to_response(&self) -> UserResponse {
        UserResponse {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            created_at: self.created_at,
        }
    }
}
