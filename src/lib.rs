//! Wellness - HTTPS API server for the Wellness app.
//!
//! A small HTTPS service exposing the wellness goal and user profile
//! endpoints, with security headers, HSTS, and per-route cache policy
//! applied as global middleware.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;

pub use routes::create_router;
