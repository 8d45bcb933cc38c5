//! Handler for the user profile endpoint.

use axum::Json;
use serde::Serialize;

/// Profile payload returned to the client.
#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub username: &'static str,
    pub phone: &'static str,
}

/// Returns the user profile.
///
/// Served with `Cache-Control: no-store` because the payload contains
/// personal data.
pub async fn show() -> Json<UserProfile> {
    Json(UserProfile {
        username: "Austin Lin",
        phone: "825-754-7566",
    })
}
