//! Immutable key snapshot.

use github_keys_source::KeyRecord;

/// The key list from one successful fetch, together with its validity window.
///
/// Keys and expiry always come from the same fetch: a snapshot is never
/// modified after construction, a refresh replaces it whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySnapshot {
    keys: Vec<KeyRecord>,
    fetched_at: u64,
    expires_at: u64,
}

impl KeySnapshot {
    /// Creates a snapshot fetched at `fetched_at` and valid for `ttl_seconds`.
    pub fn new(keys: Vec<KeyRecord>, fetched_at: u64, ttl_seconds: u64) -> Self {
        Self {
            keys,
            fetched_at,
            expires_at: fetched_at.saturating_add(ttl_seconds),
        }
    }

    /// Returns the keys in upstream order.
    pub fn keys(&self) -> &[KeyRecord] {
        &self.keys
    }

    /// Returns true if the upstream returned no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Time of the fetch that produced this snapshot.
    pub fn fetched_at(&self) -> u64 {
        self.fetched_at
    }

    /// First instant at which this snapshot must be refreshed.
    pub fn expires_at(&self) -> u64 {
        self.expires_at
    }

    /// Returns true once `now` has reached the expiry.
    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.expires_at
    }

    /// Renders the keys as newline-terminated lines.
    pub fn render(&self) -> String {
        let capacity = self.keys.iter().map(|k| k.as_str().len() + 1).sum();
        let mut body = String::with_capacity(capacity);
        for key in &self.keys {
            body.push_str(key.as_str());
            body.push('\n');
        }
        body
    }
}
