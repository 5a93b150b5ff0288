//! Key source abstraction.
//!
//! This module defines the core types for fetching keys:
//! - [`KeySource`]: the trait implemented by upstream backends
//! - [`KeyRecord`]: a single opaque public key

mod record;
mod traits;

pub use record::KeyRecord;
pub use traits::KeySource;
