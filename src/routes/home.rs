//! Landing page handler.

/// Returns the service greeting.
pub async fn index() -> &'static str {
    "Hello from the Wellness App!"
}
