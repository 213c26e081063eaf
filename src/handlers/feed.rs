// src/handlers/feed.rs
// DOCUMENTATION: HTTP handlers for feed purchase operations
// PURPOSE: Parse requests, call the feed service, return responses

use crate::errors::FarmError;
use crate::models::FeedPayload;
use crate::services::{AuthService, FeedService};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// GET /feed
/// List the caller's feed purchases, newest first
pub async fn list_feeds(
    pool: web::Data<PgPool>,
    http: HttpRequest,
) -> Result<impl Responder, FarmError> {
    let user = AuthService::authenticate(&http, pool.get_ref()).await?;
    let feeds = FeedService::list_feeds(pool.get_ref(), user.id).await?;
    Ok(HttpResponse::Ok().json(feeds))
}

/// POST /feed
/// Record a feed purchase; a positive price also creates the mirrored
/// expense transaction
pub async fn create_feed(
    pool: web::Data<PgPool>,
    http: HttpRequest,
    req: web::Json<FeedPayload>,
) -> Result<impl Responder, FarmError> {
    let user = AuthService::authenticate(&http, pool.get_ref()).await?;

    // Validate request
    if let Err(e) = req.validate() {
        return Err(FarmError::ValidationError(e.to_string()));
    }

    let feed = FeedService::create_feed(pool.get_ref(), user.id, req.into_inner()).await?;
    Ok(HttpResponse::Created().json(feed))
}

/// PATCH /feed/{id}
/// Update a feed purchase and reconcile its ledger entry
pub async fn update_feed(
    pool: web::Data<PgPool>,
    http: HttpRequest,
    path: web::Path<Uuid>,
    req: web::Json<FeedPayload>,
) -> Result<impl Responder, FarmError> {
    let user = AuthService::authenticate(&http, pool.get_ref()).await?;

    if let Err(e) = req.validate() {
        return Err(FarmError::ValidationError(e.to_string()));
    }

    let feed =
        FeedService::update_feed(pool.get_ref(), user.id, path.into_inner(), req.into_inner())
            .await?;
    Ok(HttpResponse::Ok().json(feed))
}

/// DELETE /feed/{id}
/// Delete a feed purchase together with its mirrored ledger entry
pub async fn delete_feed(
    pool: web::Data<PgPool>,
    http: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<impl Responder, FarmError> {
    let user = AuthService::authenticate(&http, pool.get_ref()).await?;
    FeedService::delete_feed(pool.get_ref(), user.id, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for feed routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/feed")
            .route("", web::get().to(list_feeds))
            .route("", web::post().to(create_feed))
            .route("/{id}", web::patch().to(update_feed))
            .route("/{id}", web::delete().to(delete_feed)),
    );
}
