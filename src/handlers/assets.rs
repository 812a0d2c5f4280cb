use actix_web::{web, HttpResponse, Result};
use tracing::{error, warn};

use crate::models::ErrorResponse;
use crate::AppState;

pub async fn index_page(state: web::Data<AppState>) -> Result<HttpResponse> {
    serve_asset(&state, "index.html", "text/html; charset=utf-8").await
}

pub async fn code_js(state: web::Data<AppState>) -> Result<HttpResponse> {
    serve_asset(&state, "code.js", "application/javascript; charset=utf-8").await
}

pub async fn style_css(state: web::Data<AppState>) -> Result<HttpResponse> {
    serve_asset(&state, "style.css", "text/css; charset=utf-8").await
}

pub async fn favicon(state: web::Data<AppState>) -> Result<HttpResponse> {
    serve_asset(&state, "favicon.ico", "image/x-icon").await
}

async fn serve_asset(state: &AppState, name: &str, content_type: &str) -> Result<HttpResponse> {
    match state.assets.read(name).await {
        Ok(Some(bytes)) => Ok(HttpResponse::Ok().content_type(content_type).body(bytes)),
        Ok(None) => {
            warn!("Asset {} missing from {}", name, state.assets.root().display());
            Ok(HttpResponse::NotFound().json(ErrorResponse::new(format!(
                "Asset not found: {}",
                name
            ))))
        }
        Err(e) => {
            error!("Asset error: {:?}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::with_details(
                "Failed to read asset",
                e.to_string(),
            )))
        }
    }
}
