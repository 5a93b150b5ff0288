//! HTTP handlers.

pub mod keys;

pub use keys::serve_keys;
