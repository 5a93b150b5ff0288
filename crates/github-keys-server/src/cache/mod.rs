//! Cache module for the github-keys server.
//!
//! This module holds the single time-bounded key snapshot served to every
//! request, refreshed lazily from the upstream source once it expires.

pub mod clock;
pub mod key_cache;
pub mod snapshot;

// Re-exports
pub use clock::{Clock, ManualClock, SystemClock};
pub use key_cache::{CacheConfig, CacheError, KeyCache};
pub use snapshot::KeySnapshot;
