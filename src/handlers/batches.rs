// src/handlers/batches.rs
// DOCUMENTATION: HTTP handlers for batch operations
// PURPOSE: Parse requests, call services, return responses

use crate::errors::FarmError;
use crate::models::{CreateBatchRequest, UpdateBatchRequest};
use crate::services::{AuthService, BatchService};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// GET /batches
/// List the caller's batches, newest start date first
pub async fn list_batches(
    pool: web::Data<PgPool>,
    http: HttpRequest,
) -> Result<impl Responder, FarmError> {
    let user = AuthService::authenticate(&http, pool.get_ref()).await?;
    let batches = BatchService::list_batches(pool.get_ref(), user.id).await?;
    Ok(HttpResponse::Ok().json(batches))
}

/// POST /batches
/// Create a new batch; the unique batch code is generated server-side
pub async fn create_batch(
    pool: web::Data<PgPool>,
    http: HttpRequest,
    req: web::Json<CreateBatchRequest>,
) -> Result<impl Responder, FarmError> {
    let user = AuthService::authenticate(&http, pool.get_ref()).await?;

    // Validate request
    if let Err(e) = req.validate() {
        return Err(FarmError::ValidationError(e.to_string()));
    }

    let batch = BatchService::create_batch(pool.get_ref(), user.id, req.into_inner()).await?;
    Ok(HttpResponse::Created().json(batch))
}

/// GET /batches/{id}
/// Retrieve a batch by ID
pub async fn get_batch(
    pool: web::Data<PgPool>,
    http: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<impl Responder, FarmError> {
    let user = AuthService::authenticate(&http, pool.get_ref()).await?;
    let batch = BatchService::get_batch(pool.get_ref(), user.id, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(batch))
}

/// PUT /batches/{id}
/// Update a batch; only provided fields are modified
pub async fn update_batch(
    pool: web::Data<PgPool>,
    http: HttpRequest,
    path: web::Path<Uuid>,
    req: web::Json<UpdateBatchRequest>,
) -> Result<impl Responder, FarmError> {
    let user = AuthService::authenticate(&http, pool.get_ref()).await?;

    if let Err(e) = req.validate() {
        return Err(FarmError::ValidationError(e.to_string()));
    }

    let batch =
        BatchService::update_batch(pool.get_ref(), user.id, path.into_inner(), req.into_inner())
            .await?;
    Ok(HttpResponse::Ok().json(batch))
}

/// DELETE /batches/{id}
/// Delete a batch
pub async fn delete_batch(
    pool: web::Data<PgPool>,
    http: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<impl Responder, FarmError> {
    let user = AuthService::authenticate(&http, pool.get_ref()).await?;
    BatchService::delete_batch(pool.get_ref(), user.id, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for batch routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/batches")
            .route("", web::get().to(list_batches))
            .route("", web::post().to(create_batch))
            .route("/{id}", web::get().to(get_batch))
            .route("/{id}", web::put().to(update_batch))
            .route("/{id}", web::delete().to(delete_batch)),
    );
}
