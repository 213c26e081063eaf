// src/services/auth_service.rs
// DOCUMENTATION: Authentication helpers
// PURPOSE: Login password verification and per-request token resolution

use crate::db::UserRepository;
use crate::errors::FarmError;
use crate::models::{LoginRequest, LoginResponse, User};
use actix_web::HttpRequest;
use sqlx::PgPool;

/// Header carrying the caller's API token
pub const API_TOKEN_HEADER: &str = "X-Api-Token";

pub struct AuthService;

impl AuthService {
    /// Resolve the request's API token to a user account
    /// DOCUMENTATION: Called at the top of every owner-scoped handler;
    /// a missing or unknown token is a 401, never a 404
    pub async fn authenticate(req: &HttpRequest, pool: &PgPool) -> Result<User, FarmError> {
        let token = req
            .headers()
            .get(API_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|t| !t.is_empty())
            .ok_or(FarmError::Unauthorized)?;

        match UserRepository::get_by_api_token(pool, token).await {
            Ok(user) => Ok(user),
            Err(FarmError::NotFound(_)) => Err(FarmError::Unauthorized),
            Err(e) => Err(e),
        }
    }

    /// Verify credentials and hand out the account token
    /// DOCUMENTATION: Unknown email and wrong password are deliberately
    /// indistinguishable to the caller
    pub async fn login(pool: &PgPool, req: LoginRequest) -> Result<LoginResponse, FarmError> {
        let user = match UserRepository::get_by_email(pool, &req.email).await {
            Ok(user) => user,
            Err(FarmError::NotFound(_)) => return Err(FarmError::Unauthorized),
            Err(e) => return Err(e),
        };

        let valid = bcrypt::verify(&req.password, &user.password_hash).map_err(|e| {
            log::error!("Password verification failed: {}", e);
            FarmError::InternalError
        })?;

        if !valid {
            log::warn!("Failed login attempt for {}", user.email);
            return Err(FarmError::Unauthorized);
        }

        log::info!("User logged in: {}", user.email);
        Ok(LoginResponse {
            token: user.api_token.clone(),
            user: user.to_response(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcrypt_roundtrip() {
        // Low cost keeps the test fast; the seed binary uses DEFAULT_COST
        let hash = bcrypt::hash("admin123", 4).unwrap();

        assert!(bcrypt::verify("admin123", &hash).unwrap());
        assert!(!bcrypt::verify("admin124", &hash).unwrap());
    }

    #[test]
    fn test_header_name() {
        assert_eq!(API_TOKEN_HEADER, "X-Api-Token");
    }
}
