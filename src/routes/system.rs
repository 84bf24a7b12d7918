use actix_web::{web, HttpResponse, Responder};

use crate::models::{HealthResponse, OwnerResponse};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/stats", web::get().to(stats))
        .route("/owner", web::get().to(owner));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Store and cache counters
///
/// GET /api/v1/stats
async fn stats(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.service.stats().await)
}

/// Identity that deployed this instance
///
/// GET /api/v1/owner
async fn owner(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(OwnerResponse {
        owner: state.service.owner().clone(),
    })
}
