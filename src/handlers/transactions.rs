// src/handlers/transactions.rs
// DOCUMENTATION: HTTP handlers for the financial ledger
// PURPOSE: Manual entries, listing, and the finance page aggregates

use crate::errors::FarmError;
use crate::models::{CreateTransactionRequest, LedgerQuery};
use crate::services::{AuthService, LedgerService};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// GET /transactions
/// Paginated ledger listing, newest first
pub async fn list_transactions(
    pool: web::Data<PgPool>,
    http: HttpRequest,
    query: web::Query<LedgerQuery>,
) -> Result<impl Responder, FarmError> {
    let user = AuthService::authenticate(&http, pool.get_ref()).await?;
    let result = LedgerService::list_entries(pool.get_ref(), user.id, query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// POST /transactions
/// Record a manual income or expense entry
pub async fn create_transaction(
    pool: web::Data<PgPool>,
    http: HttpRequest,
    req: web::Json<CreateTransactionRequest>,
) -> Result<impl Responder, FarmError> {
    let user = AuthService::authenticate(&http, pool.get_ref()).await?;

    // Validate request
    if let Err(e) = req.validate() {
        return Err(FarmError::ValidationError(e.to_string()));
    }

    let transaction =
        LedgerService::add_entry(pool.get_ref(), user.id, req.into_inner()).await?;
    Ok(HttpResponse::Created().json(transaction))
}

/// GET /transactions/summary
/// Whole-ledger income/expense totals and balance
pub async fn ledger_summary(
    pool: web::Data<PgPool>,
    http: HttpRequest,
) -> Result<impl Responder, FarmError> {
    let user = AuthService::authenticate(&http, pool.get_ref()).await?;
    let summary = LedgerService::summary(pool.get_ref(), user.id).await?;
    Ok(HttpResponse::Ok().json(summary))
}

/// GET /transactions/stats
/// Six-month monthly income/expense series for the finance chart
pub async fn ledger_stats(
    pool: web::Data<PgPool>,
    http: HttpRequest,
) -> Result<impl Responder, FarmError> {
    let user = AuthService::authenticate(&http, pool.get_ref()).await?;
    let stats = LedgerService::monthly_stats(pool.get_ref(), user.id).await?;
    Ok(HttpResponse::Ok().json(stats))
}

/// DELETE /transactions/{id}
/// Remove a ledger entry
pub async fn delete_transaction(
    pool: web::Data<PgPool>,
    http: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<impl Responder, FarmError> {
    let user = AuthService::authenticate(&http, pool.get_ref()).await?;
    LedgerService::delete_entry(pool.get_ref(), user.id, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for transaction routes
/// The literal /summary and /stats routes are registered before /{id}
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/transactions")
            .route("", web::get().to(list_transactions))
            .route("", web::post().to(create_transaction))
            .route("/summary", web::get().to(ledger_summary))
            .route("/stats", web::get().to(ledger_stats))
            .route("/{id}", web::delete().to(delete_transaction)),
    );
}
