// src/handlers/eggs.rs
// DOCUMENTATION: HTTP handlers for egg records
// PURPOSE: Daily records and the dashboard production chart data

use crate::errors::FarmError;
use crate::models::{BatchFilterQuery, CreateEggRequest};
use crate::services::{AuthService, EggService};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// GET /eggs
/// List egg records, optionally filtered by ?batch=
pub async fn list_eggs(
    pool: web::Data<PgPool>,
    http: HttpRequest,
    query: web::Query<BatchFilterQuery>,
) -> Result<impl Responder, FarmError> {
    let user = AuthService::authenticate(&http, pool.get_ref()).await?;
    let eggs = EggService::list_eggs(pool.get_ref(), user.id, query.batch).await?;
    Ok(HttpResponse::Ok().json(eggs))
}

/// POST /eggs
/// Record a day's egg numbers for a batch
pub async fn create_egg(
    pool: web::Data<PgPool>,
    http: HttpRequest,
    req: web::Json<CreateEggRequest>,
) -> Result<impl Responder, FarmError> {
    let user = AuthService::authenticate(&http, pool.get_ref()).await?;

    // Validate request
    if let Err(e) = req.validate() {
        return Err(FarmError::ValidationError(e.to_string()));
    }

    let egg = EggService::record_egg(pool.get_ref(), user.id, req.into_inner()).await?;
    Ok(HttpResponse::Created().json(egg))
}

/// GET /eggs/stats
/// Six-month monthly collected/sold/spoiled series, optionally per batch
pub async fn egg_stats(
    pool: web::Data<PgPool>,
    http: HttpRequest,
    query: web::Query<BatchFilterQuery>,
) -> Result<impl Responder, FarmError> {
    let user = AuthService::authenticate(&http, pool.get_ref()).await?;
    let stats = EggService::monthly_stats(pool.get_ref(), user.id, query.batch).await?;
    Ok(HttpResponse::Ok().json(stats))
}

/// DELETE /eggs/{id}
/// Remove an egg record
pub async fn delete_egg(
    pool: web::Data<PgPool>,
    http: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<impl Responder, FarmError> {
    let user = AuthService::authenticate(&http, pool.get_ref()).await?;
    EggService::delete_egg(pool.get_ref(), user.id, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for egg routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/eggs")
            .route("", web::get().to(list_eggs))
            .route("", web::post().to(create_egg))
            .route("/stats", web::get().to(egg_stats))
            .route("/{id}", web::delete().to(delete_egg)),
    );
}
