//! Handlers for the wellness goal endpoints.
//!
//! Goals have no backing store yet; handlers echo the request back so the
//! API surface and caching behavior can be exercised end to end.

use axum::extract::Path;
use axum::Json;
use serde_json::Value;

/// Lists wellness goals.
pub async fn list() -> &'static str {
    "Showing wellness goals"
}

/// Shows the steps for a single goal.
///
/// The identifier is echoed back verbatim; it is not required to be numeric.
pub async fn show(Path(id): Path<String>) -> String {
    format!("Showing steps for goal No.{}", id)
}

/// Creates a new goal from the JSON request body.
pub async fn create(Json(goal): Json<Value>) -> String {
    format!("Added new goal: {}", goal)
}

/// Marks a goal as finished.
pub async fn finish(Path(id): Path<String>) -> String {
    format!("Goal No.{} finished, awesome!", id)
}
