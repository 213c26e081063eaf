// src/handlers/vaccinations.rs
// DOCUMENTATION: HTTP handlers for vaccination schedules
// PURPOSE: Scheduling, completion, and the dashboard schedule table

use crate::errors::FarmError;
use crate::models::{BatchFilterQuery, CompleteVaccinationRequest, CreateVaccinationRequest};
use crate::services::{AuthService, VaccinationService};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// GET /vaccinations
/// List the schedule with derived statuses, optionally filtered by ?batch=
pub async fn list_vaccinations(
    pool: web::Data<PgPool>,
    http: HttpRequest,
    query: web::Query<BatchFilterQuery>,
) -> Result<impl Responder, FarmError> {
    let user = AuthService::authenticate(&http, pool.get_ref()).await?;
    let vaccinations = VaccinationService::list(pool.get_ref(), user.id, query.batch).await?;
    Ok(HttpResponse::Ok().json(vaccinations))
}

/// POST /vaccinations
/// Schedule a vaccination for a batch
pub async fn create_vaccination(
    pool: web::Data<PgPool>,
    http: HttpRequest,
    req: web::Json<CreateVaccinationRequest>,
) -> Result<impl Responder, FarmError> {
    let user = AuthService::authenticate(&http, pool.get_ref()).await?;

    // Validate request
    if let Err(e) = req.validate() {
        return Err(FarmError::ValidationError(e.to_string()));
    }

    let vaccination =
        VaccinationService::schedule(pool.get_ref(), user.id, req.into_inner()).await?;
    Ok(HttpResponse::Created().json(vaccination))
}

/// PATCH /vaccinations/{id}
/// Mark a scheduled vaccination as completed
pub async fn complete_vaccination(
    pool: web::Data<PgPool>,
    http: HttpRequest,
    path: web::Path<Uuid>,
    req: Option<web::Json<CompleteVaccinationRequest>>,
) -> Result<impl Responder, FarmError> {
    let user = AuthService::authenticate(&http, pool.get_ref()).await?;

    // The body is optional; an empty PATCH completes with today's date
    let body = req.map(|j| j.into_inner()).unwrap_or_default();

    let vaccination =
        VaccinationService::complete(pool.get_ref(), user.id, path.into_inner(), body).await?;
    Ok(HttpResponse::Ok().json(vaccination))
}

/// DELETE /vaccinations/{id}
/// Remove a schedule entry
pub async fn delete_vaccination(
    pool: web::Data<PgPool>,
    http: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<impl Responder, FarmError> {
    let user = AuthService::authenticate(&http, pool.get_ref()).await?;
    VaccinationService::delete(pool.get_ref(), user.id, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for vaccination routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/vaccinations")
            .route("", web::get().to(list_vaccinations))
            .route("", web::post().to(create_vaccination))
            .route("/{id}", web::patch().to(complete_vaccination))
            .route("/{id}", web::delete().to(delete_vaccination)),
    );
}
