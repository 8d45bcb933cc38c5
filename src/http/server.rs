//! HTTPS server startup logic.
//!
//! The certificate and private key are loaded once at startup; failure to
//! read either file is fatal. Certificates can be swapped at runtime by
//! sending SIGHUP (see [`super::shutdown`]).

use std::net::SocketAddr;

use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to load TLS certificate files: {0}")]
    TlsConfig(String),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Start the HTTPS server.
///
/// Loads the TLS key pair from the configured paths, binds the listen port,
/// and serves until shutdown. This function blocks until the server stops.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let rustls_config = RustlsConfig::from_pem_file(&config.cert_path, &config.key_path)
        .await
        .map_err(|e| ServerError::TlsConfig(e.to_string()))?;

    let handle = Handle::new();

    // Setup graceful shutdown
    shutdown::setup_shutdown_handler(handle.clone());

    // Setup SIGHUP handler for certificate reload
    shutdown::setup_reload_handler(
        rustls_config.clone(),
        config.cert_path.clone(),
        config.key_path.clone(),
    );

    tracing::info!(%addr, cert = %config.cert_path, key = %config.key_path, "HTTPS server running");

    axum_server::bind_rustls(addr, rustls_config)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(ServerError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_certificate_files_fail_startup() {
        let dir = tempfile::tempdir().unwrap();
        let cert = dir.path().join("certificate.pem");
        let key = dir.path().join("private-key.pem");

        let result = RustlsConfig::from_pem_file(&cert, &key).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn garbage_pem_fails_startup() {
        let dir = tempfile::tempdir().unwrap();
        let cert = dir.path().join("certificate.pem");
        let key = dir.path().join("private-key.pem");
        std::fs::write(&cert, "not a pem").unwrap();
        std::fs::write(&key, "also not a pem").unwrap();

        let result = RustlsConfig::from_pem_file(&cert, &key).await;
        assert!(result.is_err());
    }
}
