// src/handlers/mortality.rs
// DOCUMENTATION: HTTP handlers for mortality records
// PURPOSE: Record and review bird losses per batch

use crate::errors::FarmError;
use crate::models::{BatchFilterQuery, CreateMortalityRequest};
use crate::services::{AuthService, MortalityService};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// GET /mortality
/// List loss records, optionally filtered by ?batch=
pub async fn list_mortality(
    pool: web::Data<PgPool>,
    http: HttpRequest,
    query: web::Query<BatchFilterQuery>,
) -> Result<impl Responder, FarmError> {
    let user = AuthService::authenticate(&http, pool.get_ref()).await?;
    let records = MortalityService::list_losses(pool.get_ref(), user.id, query.batch).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// POST /mortality
/// Record a loss for a batch
pub async fn create_mortality(
    pool: web::Data<PgPool>,
    http: HttpRequest,
    req: web::Json<CreateMortalityRequest>,
) -> Result<impl Responder, FarmError> {
    let user = AuthService::authenticate(&http, pool.get_ref()).await?;

    if let Err(e) = req.validate() {
        return Err(FarmError::ValidationError(e.to_string()));
    }

    let record = MortalityService::record_loss(pool.get_ref(), user.id, req.into_inner()).await?;
    Ok(HttpResponse::Created().json(record))
}

/// DELETE /mortality/{id}
/// Remove a loss record
pub async fn delete_mortality(
    pool: web::Data<PgPool>,
    http: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<impl Responder, FarmError> {
    let user = AuthService::authenticate(&http, pool.get_ref()).await?;
    MortalityService::delete_loss(pool.get_ref(), user.id, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for mortality routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/mortality")
            .route("", web::get().to(list_mortality))
            .route("", web::post().to(create_mortality))
            .route("/{id}", web::delete().to(delete_mortality)),
    );
}
