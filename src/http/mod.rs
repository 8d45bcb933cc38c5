//! HTTPS server module.
//!
//! Terminates TLS with a certificate/key pair read from disk at startup.
//! Missing or unreadable key material is a fatal startup error. The server
//! also handles:
//! - Graceful shutdown on SIGTERM/SIGINT
//! - Certificate hot-reload via SIGHUP

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
