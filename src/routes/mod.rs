//! HTTP route handlers for the wellness API.
//!
//! Routes are grouped by cache policy, with per-group Cache-Control headers.
//! Read-only goal content is cacheable for a few minutes; the user profile is
//! never cached. The create and finish routes modify data, so caching them
//! makes no sense and they set no Cache-Control header at all.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod goals;
pub mod home;
pub mod profile;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL, STRICT_TRANSPORT_SECURITY};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::{CACHE_CONTROL_GOALS, CACHE_CONTROL_PROFILE, HSTS_VALUE};
use crate::middleware::{request_id_layer, security_headers_layer};

/// Creates the Axum router with all routes, cache headers, and the global
/// security middleware.
pub fn create_router() -> Router {
    // Read-only goal pages - public cache with stale-while-revalidate
    let cached_routes = Router::new()
        .route("/", get(home::index))
        .route("/api/goals", get(goals::list))
        .route("/api/goals/{id}", get(goals::show))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_GOALS),
        ));

    // User profile - sensitive personal data, never cached
    let profile_routes = Router::new()
        .route("/api/user-profile", get(profile::show))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PROFILE),
        ));

    // Mutating routes - no cache policy at all
    let mutating_routes = Router::new()
        .route("/api/goals", post(goals::create))
        .route("/api/goals/{id}/finish", put(goals::finish));

    Router::new()
        .merge(cached_routes)
        .merge(profile_routes)
        .merge(mutating_routes)
        // HSTS on every response, including errors from the fallback
        .layer(SetResponseHeaderLayer::overriding(
            STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static(HSTS_VALUE),
        ))
        // Defensive header set, applied before route-specific handling
        .layer(middleware::from_fn(security_headers_layer))
        .layer(TraceLayer::new_for_http())
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
