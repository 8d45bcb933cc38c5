//! Wellness: an HTTPS API server for the Wellness app.
//!
//! This is the application entry point. It initializes tracing, resolves
//! configuration from the environment and command line, builds the Axum
//! router with its security and caching middleware, and starts the HTTPS
//! server. Failure to load the TLS key material terminates the process with
//! a non-zero exit status.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wellness::config::{
    AppConfig, DEFAULT_CERT_PATH, DEFAULT_KEY_PATH, DEFAULT_LOG_FILTER, DEFAULT_LOG_FORMAT,
};
use wellness::http::{self, ServerError};
use wellness::routes::create_router;

/// Wellness: HTTPS API server for the Wellness app
#[derive(Parser, Debug)]
#[command(name = "wellness", version, about)]
struct Args {
    /// Path to the TLS certificate file
    #[arg(long, default_value = DEFAULT_CERT_PATH)]
    cert: String,

    /// Path to the TLS private key file
    #[arg(long, default_value = DEFAULT_KEY_PATH)]
    key: String,

    /// Log level filter (e.g., "wellness=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log format: "text" or "json"
    #[arg(long, default_value = DEFAULT_LOG_FORMAT)]
    log_format: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if args.log_format == "json" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let config = AppConfig::from_env(args.cert, args.key);
    tracing::info!(port = config.port, "Loaded configuration");

    let app = create_router();

    match http::start_server(app, &config).await {
        Ok(()) => {}
        Err(e @ ServerError::TlsConfig(_)) => {
            tracing::error!(error = %e, "Error reading TLS certificate files");
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!(error = %e, "Server failed");
            std::process::exit(1);
        }
    }
}
