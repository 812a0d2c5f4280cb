use actix_web::{web, HttpResponse, Result};
use std::sync::atomic::Ordering;

use crate::models::{ErrorResponse, HealthResponse};
use crate::AppState;

pub async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse> {
    let stats = state.search_service.cache().stats();
    let documents = state.search_service.index().total_documents();

    let response = HealthResponse {
        status: if documents > 0 { "healthy" } else { "empty" }.to_string(),
        documents,
        scoring: state.config.search.scoring.to_string(),
        cache_requests: stats.total_requests.load(Ordering::Relaxed),
        cache_hits: stats.hits.load(Ordering::Relaxed),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    Ok(HttpResponse::Ok().json(response))
}

pub async fn not_found() -> Result<HttpResponse> {
    Ok(HttpResponse::NotFound().json(ErrorResponse::new(
        "Endpoint not found"
    )))
}
