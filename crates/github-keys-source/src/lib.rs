//! # GitHub Keys Source
//!
//! Upstream public key source for the github-keys server.
//!
//! This crate knows how to ask an upstream API for the current public keys of
//! a single account. It keeps no state between calls: caching, expiry and
//! fallback policy live in the server crate.
//!
//! ## Features
//!
//! - Async trait-based key source abstraction
//! - GitHub (or any compatible) endpoint via a `{username}` URL template
//! - Typed errors separating transport failures from malformed bodies
//!
//! ## Example
//!
//! ```ignore
//! use github_keys_source::{GitHubKeySource, KeySource, KeySourceConfig};
//!
//! let config = KeySourceConfig::builder()
//!     .url_template("https://api.github.com/users/{username}/keys")
//!     .build()?;
//!
//! let source = GitHubKeySource::new(config)?;
//! let keys = source.fetch("octocat").await?;
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod source;

// Re-exports
pub use backend::GitHubKeySource;
pub use config::{DEFAULT_URL_TEMPLATE, KeySourceConfig, KeySourceConfigBuilder, USERNAME_PLACEHOLDER};
pub use error::KeySourceError;
pub use source::{KeyRecord, KeySource};
