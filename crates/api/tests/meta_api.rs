//! Integration tests for the root metadata endpoint and cross-cutting HTTP
//! behaviour (CORS, private-network header, request IDs).

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_test_app, get};
use serde_json::json;
use sqlx::SqlitePool;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET / returns static service metadata
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn root_returns_service_metadata(pool: SqlitePool) {
    let app = build_test_app(pool).await;
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "message": "Rick and Morty API",
            "endpoints": ["/character", "/character/:id"],
        })
    );
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn unknown_route_returns_404(pool: SqlitePool) {
    let app = build_test_app(pool).await;
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: CORS preflight reflects the request origin
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn cors_preflight_reflects_origin(pool: SqlitePool) {
    let app = build_test_app(pool).await;

    // CORS preflight requires custom headers, so build the request manually.
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/character")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();

    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("POST"),
        "Allow-Methods should contain POST, got: {allow_methods}"
    );

    let allow_headers = headers
        .get("access-control-allow-headers")
        .expect("Missing Access-Control-Allow-Headers header")
        .to_str()
        .unwrap();
    assert!(
        allow_headers.to_ascii_lowercase().contains("content-type"),
        "Allow-Headers should contain content-type, got: {allow_headers}"
    );
}

// ---------------------------------------------------------------------------
// Test: every response carries the private-network header
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn responses_carry_private_network_header(pool: SqlitePool) {
    let app = build_test_app(pool).await;
    let response = get(app, "/").await;

    let value = response
        .headers()
        .get("access-control-allow-private-network")
        .expect("Missing Access-Control-Allow-Private-Network header")
        .to_str()
        .unwrap();
    assert_eq!(value, "true");
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn response_contains_x_request_id_header(pool: SqlitePool) {
    let app = build_test_app(pool).await;
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}
