//! github-keys server
//!
//! Axum-based HTTP server that republishes one account's public keys from a
//! lazily refreshed TTL cache.

pub mod cache;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod server;
pub mod state;

pub use server::{create_router, normalize_listen_addr, run_server};
pub use state::AppState;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
