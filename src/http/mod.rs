//! HTTP server module.
//!
//! The server includes:
//! - Plain HTTP listener (TLS is left to a fronting reverse proxy)
//! - Graceful shutdown on SIGTERM/SIGINT
//! - Static file serving with theme fallback

mod server;
mod shutdown;
pub mod static_files;

pub use server::{start_server, ServerError};
pub use shutdown::shutdown_signal;
