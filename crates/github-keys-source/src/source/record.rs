//! Public key record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single public key exactly as the upstream returned it.
///
/// The value is opaque: it is never parsed or validated as SSH key syntax.
/// Its only identity is its position in the list it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyRecord(String);

impl KeyRecord {
    /// Creates a new key record.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for KeyRecord {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&str> for KeyRecord {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl AsRef<str> for KeyRecord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
