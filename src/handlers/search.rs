use actix_web::error::{InternalError, QueryPayloadError};
use actix_web::{web, HttpRequest, HttpResponse, Result};
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::models::{ErrorResponse, SearchParams, SearchResponseItem};
use crate::AppState;

/// `GET /search?q=<term>`
///
/// Answers a JSON array of `{url, title}` hits, best first, or a single
/// `{message}` element when nothing matches.
pub async fn search(
    state: web::Data<AppState>,
    params: web::Query<SearchParams>,
) -> Result<HttpResponse> {
    if let Err(e) = params.validate() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::with_details(
            "Invalid request",
            format!("Validation error: {}", e),
        )));
    }

    let request_id = Uuid::new_v4();
    let term = params.q.as_deref().unwrap_or_default();
    let results = state.search_service.search(term).await;

    info!(%request_id, "Search {:?} matched {} pages", term, results.len());
    for result in &results {
        debug!(%request_id, "{}", result);
    }

    let body: Vec<SearchResponseItem> = if results.is_empty() {
        vec![SearchResponseItem::no_results()]
    } else {
        results
            .into_iter()
            .map(|result| SearchResponseItem::Hit {
                url: result.url,
                title: result.title,
            })
            .collect()
    };

    Ok(HttpResponse::Ok().json(body))
}

/// Answers malformed query strings with an `ErrorResponse` instead of
/// actix-web's plain-text body.
pub fn query_error(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!("Rejected query string {:?}: {}", req.query_string(), err);
    let response = HttpResponse::BadRequest().json(ErrorResponse::with_details(
        "Invalid request",
        format!("Query error: {}", err),
    ));
    InternalError::from_response(err, response).into()
}
