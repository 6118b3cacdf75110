//! CORS behavior tests.
//!
//! These drive the router directly with `tower::ServiceExt::oneshot` so the
//! exact response headers can be asserted.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use camphand::routes::{self, AppState};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

const FRONTEND_ORIGIN: &str = "http://localhost:5173";

fn app(origins: Vec<&str>) -> axum::Router {
    let state = Arc::new(AppState { schema: None });
    routes::create_router(state, origins.into_iter().map(String::from).collect())
}

#[tokio::test]
async fn test_allowed_origin_receives_cors_headers() {
    let app = app(vec![FRONTEND_ORIGIN]);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api")
                .header(header::ORIGIN, FRONTEND_ORIGIN)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some(FRONTEND_ORIGIN)
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], br#"{"message":"Hello API"}"#);
}

#[tokio::test]
async fn test_preflight_allows_all_methods_and_headers() {
    let app = app(vec![FRONTEND_ORIGIN]);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api")
                .header(header::ORIGIN, FRONTEND_ORIGIN)
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some(FRONTEND_ORIGIN)
    );
    // Mirrored back rather than `*`, since credentials are allowed
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .and_then(|v| v.to_str().ok()),
        Some("GET")
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
            .and_then(|v| v.to_str().ok()),
        Some("content-type")
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
}

#[tokio::test]
async fn test_unlisted_origin_gets_no_cors_headers() {
    let app = app(vec![FRONTEND_ORIGIN]);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api")
                .header(header::ORIGIN, "http://evil.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // The server still answers; the browser enforces the missing header
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_wildcard_origin_configuration() {
    let app = app(vec!["*"]);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/health")
                .header(header::ORIGIN, "http://anywhere.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn test_cors_headers_on_unknown_path() {
    let app = app(vec![FRONTEND_ORIGIN]);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/unknown")
                .header(header::ORIGIN, FRONTEND_ORIGIN)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // CORS applies to every route, including the framework 404
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some(FRONTEND_ORIGIN)
    );
}
