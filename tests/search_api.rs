mod common;

use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use serde_json::{json, Value};

use searchengine::handlers::not_found;
use searchengine::models::NO_RESULTS_MESSAGE;
use searchengine::routes::api;

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .service(api::config())
                .default_service(web::route().to(not_found)),
        )
        .await
    };
}

#[actix_rt::test]
async fn search_returns_ranked_hits() {
    let root = common::web_root();
    let app = init_app!(common::state(root.path()));

    let req = test::TestRequest::get().uri("/search?q=example").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!([
            {"url": "http://page2.com", "title": "title2"},
            {"url": "http://page1.com", "title": "title1"}
        ])
    );
}

#[actix_rt::test]
async fn search_decodes_percent_encoded_terms() {
    let root = common::web_root();
    let app = init_app!(common::state(root.path()));

    let req = test::TestRequest::get()
        .uri("/search?q=sample%20OR%20banana%20pie")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!([
            {"url": "http://page3.com", "title": "title3"},
            {"url": "http://page1.com", "title": "title1"}
        ])
    );
}

#[actix_rt::test]
async fn unknown_word_answers_message_sentinel() {
    let root = common::web_root();
    let app = init_app!(common::state(root.path()));

    for uri in ["/search?q=flower1", "/search?q=", "/search", "/search?q=OR"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([{"message": NO_RESULTS_MESSAGE}]), "{}", uri);
    }
}

#[actix_rt::test]
async fn overlong_query_is_rejected() {
    let root = common::web_root();
    let app = init_app!(common::state(root.path()));

    let uri = format!("/search?q={}", "a".repeat(600));
    let req = test::TestRequest::get().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid request");
}

#[actix_rt::test]
async fn malformed_query_string_answers_error_json() {
    let root = common::web_root();
    let app = init_app!(common::state(root.path()));

    let req = test::TestRequest::get().uri("/search?q=a&q=b").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid request");
    assert!(body["details"].as_str().unwrap().contains("duplicate field"));
}

#[actix_rt::test]
async fn static_assets_are_served_with_content_types() {
    let root = common::web_root();
    let app = init_app!(common::state(root.path()));

    let cases = [
        ("/", "text/html; charset=utf-8", "<html><body>search</body></html>"),
        ("/code.js", "application/javascript; charset=utf-8", "// client"),
        ("/style.css", "text/css; charset=utf-8", "body {}"),
    ];
    for (uri, content_type, expected) in cases {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
        assert_eq!(resp.headers().get(header::CONTENT_TYPE).unwrap(), content_type);

        let body = test::read_body(resp).await;
        assert_eq!(body, expected.as_bytes(), "{}", uri);
    }
}

#[actix_rt::test]
async fn missing_asset_is_not_found() {
    let root = common::web_root();
    let app = init_app!(common::state(root.path()));

    let req = test::TestRequest::get().uri("/favicon.ico").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Asset not found: favicon.ico");
}

#[actix_rt::test]
async fn unknown_route_is_not_found() {
    let root = common::web_root();
    let app = init_app!(common::state(root.path()));

    let req = test::TestRequest::get().uri("/admin").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Endpoint not found");
}

#[actix_rt::test]
async fn health_reports_index_and_cache() {
    let root = common::web_root();
    let app = init_app!(common::state(root.path()));

    for _ in 0..2 {
        let req = test::TestRequest::get().uri("/search?q=apple").to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["documents"], 3);
    assert_eq!(body["scoring"], "tf");
    assert_eq!(body["cache_requests"], 2);
    assert_eq!(body["cache_hits"], 1);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
