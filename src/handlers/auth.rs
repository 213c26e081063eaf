// src/handlers/auth.rs
// DOCUMENTATION: HTTP handlers for authentication
// PURPOSE: Exchange credentials for the account API token

use crate::errors::FarmError;
use crate::models::LoginRequest;
use crate::services::AuthService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// POST /auth/login
/// Verify credentials and return the account token
pub async fn login(
    pool: web::Data<PgPool>,
    req: web::Json<LoginRequest>,
) -> Result<impl Responder, FarmError> {
    // Validate request
    if let Err(e) = req.validate() {
        return Err(FarmError::ValidationError(e.to_string()));
    }

    let response = AuthService::login(pool.get_ref(), req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Configuration for auth routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/auth").route("/login", web::post().to(login)));
}
