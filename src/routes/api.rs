use crate::handlers;
use actix_web::{web, Scope};

pub fn config() -> Scope {
    web::scope("")
        .app_data(web::QueryConfig::default().error_handler(handlers::query_error))
        .route("/", web::get().to(handlers::index_page))
        .route("/search", web::get().to(handlers::search))
        .route("/code.js", web::get().to(handlers::code_js))
        .route("/style.css", web::get().to(handlers::style_css))
        .route("/favicon.ico", web::get().to(handlers::favicon))
        .route("/health", web::get().to(handlers::health_check))
}
