//! Configuration loading and constants.
//!
//! Defines the Cache-Control and Strict-Transport-Security header values,
//! default paths for TLS key material, and `AppConfig`, which is resolved at
//! startup from the environment and command line.

use const_format::formatcp;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// These constants control Cache-Control headers for browsers and upstream
// caches. All values are in seconds. Directives used:
// - max-age: How long the response is considered fresh
// - stale-while-revalidate: Serve stale while fetching fresh in background
//
// References:
// - RFC 9111 (HTTP Caching): https://httpwg.org/specs/rfc9111.html
// - RFC 5861 (stale-* extensions): https://httpwg.org/specs/rfc5861.html

/// Read-only goal pages - freely cacheable for a few minutes
pub const HTTP_CACHE_GOALS_MAX_AGE: u32 = 300;
pub const HTTP_CACHE_GOALS_SWR: u32 = 360;

/// Cache-Control for the read-only, non-sensitive routes
pub const CACHE_CONTROL_GOALS: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}",
    HTTP_CACHE_GOALS_MAX_AGE,
    HTTP_CACHE_GOALS_SWR
);

/// Cache-Control for the user profile route. The profile carries personal
/// data, so it must never land in any cache.
pub const CACHE_CONTROL_PROFILE: &str = "no-store";

// =============================================================================
// Strict-Transport-Security
// =============================================================================

/// HSTS max-age: one year
pub const HSTS_MAX_AGE: u32 = 31_536_000;

/// Strict-Transport-Security header value, sent on every response
pub const HSTS_VALUE: &str = formatcp!("max-age={}; includeSubDomains; preload", HSTS_MAX_AGE);

// =============================================================================
// Defaults
// =============================================================================

/// Environment variable consulted for the listen port
pub const PORT_ENV_VAR: &str = "PORT";

/// Listen port used when PORT is unset or unparseable
pub const DEFAULT_PORT: u16 = 3000;

/// Default TLS certificate path (working directory)
pub const DEFAULT_CERT_PATH: &str = "certificate.pem";

/// Default TLS private key path (working directory)
pub const DEFAULT_KEY_PATH: &str = "private-key.pem";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "wellness=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Resolved server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the HTTPS listener binds
    pub port: u16,
    /// Path to the PEM-encoded certificate chain
    pub cert_path: String,
    /// Path to the PEM-encoded private key
    pub key_path: String,
}

impl AppConfig {
    /// Resolve configuration from the environment and the given TLS paths.
    ///
    /// The port comes from `PORT`; a missing or unparseable value falls back
    /// to [`DEFAULT_PORT`] rather than failing startup.
    pub fn from_env(cert_path: String, key_path: String) -> Self {
        let port = parse_port(std::env::var(PORT_ENV_VAR).ok());
        Self {
            port,
            cert_path,
            key_path,
        }
    }
}

/// Parse a port value, falling back to the default on absent or bad input.
fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT)
}
