//! Integration tests for the HTTP surface.
//!
//! Drives the router directly with in-memory requests, covering the cache
//! policy of each route class, the security and HSTS middleware, and the
//! response bodies.

use axum::body::{to_bytes, Body};
use http::header::{CACHE_CONTROL, CONTENT_TYPE, STRICT_TRANSPORT_SECURITY};
use http::{Method, Request, Response, StatusCode};
use tower::ServiceExt;

use wellness::create_router;

const CACHED: &str = "public, max-age=300, stale-while-revalidate=360";
const HSTS: &str = "max-age=31536000; includeSubDomains; preload";

async fn send(request: Request<Body>) -> Response<Body> {
    create_router().oneshot(request).await.unwrap()
}

async fn get(path: &str) -> Response<Body> {
    send(Request::builder().uri(path).body(Body::empty()).unwrap()).await
}

async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn header<'a>(response: &'a Response<Body>, name: &http::HeaderName) -> Option<&'a str> {
    response.headers().get(name).map(|v| v.to_str().unwrap())
}

#[tokio::test]
async fn greeting_is_served_and_cacheable() {
    let response = get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header(&response, &CACHE_CONTROL), Some(CACHED));
    assert_eq!(body_string(response).await, "Hello from the Wellness App!");
}

#[tokio::test]
async fn goal_list_is_cacheable() {
    let response = get("/api/goals").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header(&response, &CACHE_CONTROL), Some(CACHED));
    assert_eq!(body_string(response).await, "Showing wellness goals");
}

#[tokio::test]
async fn goal_detail_echoes_the_id() {
    let response = get("/api/goals/42").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header(&response, &CACHE_CONTROL), Some(CACHED));
    assert_eq!(body_string(response).await, "Showing steps for goal No.42");
}

#[tokio::test]
async fn goal_detail_accepts_non_numeric_ids() {
    let response = get("/api/goals/abc").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Showing steps for goal No.abc");
}

#[tokio::test]
async fn profile_is_never_cached() {
    let response = get("/api/user-profile").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header(&response, &CACHE_CONTROL), Some("no-store"));
    assert_eq!(header(&response, &CONTENT_TYPE), Some("application/json"));
    assert_eq!(
        body_string(response).await,
        r#"{"username":"Austin Lin","phone":"825-754-7566"}"#
    );
}

#[tokio::test]
async fn create_goal_echoes_body_without_cache_policy() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/goals")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":"run"}"#))
        .unwrap();
    let response = send(request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(CACHE_CONTROL).is_none());
    assert_eq!(
        body_string(response).await,
        r#"Added new goal: {"name":"run"}"#
    );
}

#[tokio::test]
async fn finish_goal_echoes_id_without_cache_policy() {
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/api/goals/7/finish")
        .body(Body::empty())
        .unwrap();
    let response = send(request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(CACHE_CONTROL).is_none());
    assert_eq!(body_string(response).await, "Goal No.7 finished, awesome!");
}

#[tokio::test]
async fn hsts_is_sent_on_every_route() {
    let routes: &[(Method, &str)] = &[
        (Method::GET, "/"),
        (Method::GET, "/api/goals"),
        (Method::GET, "/api/goals/42"),
        (Method::GET, "/api/user-profile"),
        (Method::POST, "/api/goals"),
        (Method::PUT, "/api/goals/7/finish"),
    ];

    for (method, path) in routes {
        let mut builder = Request::builder().method(method.clone()).uri(*path);
        let body = if *method == Method::POST {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from("{}")
        } else {
            Body::empty()
        };
        let response = send(builder.body(body).unwrap()).await;

        assert_eq!(
            header(&response, &STRICT_TRANSPORT_SECURITY),
            Some(HSTS),
            "missing or wrong HSTS header on {} {}",
            method,
            path
        );
    }
}

#[tokio::test]
async fn security_headers_are_applied_globally() {
    let response = get("/").await;

    let nosniff = http::header::X_CONTENT_TYPE_OPTIONS;
    let frame_options = http::header::X_FRAME_OPTIONS;
    assert_eq!(header(&response, &nosniff), Some("nosniff"));
    assert_eq!(header(&response, &frame_options), Some("SAMEORIGIN"));
    assert!(response
        .headers()
        .get(http::header::CONTENT_SECURITY_POLICY)
        .is_some());
}

#[tokio::test]
async fn unknown_route_returns_404_with_hsts() {
    let response = get("/unknown").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(header(&response, &STRICT_TRANSPORT_SECURITY), Some(HSTS));
}
