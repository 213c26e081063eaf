// src/db/user_repository.rs
// DOCUMENTATION: Database access layer for user accounts
// PURPOSE: Lookups used by login and per-request authentication

use crate::errors::FarmError;
use crate::models::User;
use sqlx::PgPool;

/// UserRepository: All database operations for user accounts
pub struct UserRepository;

impl UserRepository {
    /// Retrieve a user by login email
    /// DOCUMENTATION: Used by POST /auth/login; email is matched lowercase
    pub async fn get_by_email(pool: &PgPool, email: &str) -> Result<User, FarmError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, name, api_token, created_at
            FROM users
            WHERE email = LOWER($1)
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch user by email: {}", e);
            FarmError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| FarmError::NotFound(format!("User with email '{}' not found", email)))?;

        Ok(user)
    }

    /// Retrieve a user by API token
    /// DOCUMENTATION: Used on every authenticated request
    pub async fn get_by_api_token(pool: &PgPool, token: &str) -> Result<User, FarmError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, name, api_token, created_at
            FROM users
            WHERE api_token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch user by token: {}", e);
            FarmError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| FarmError::NotFound("api token".to_string()))?;

        Ok(user)
    }
}
