//! Key source trait definition.

use async_trait::async_trait;

use super::KeyRecord;
use crate::error::KeySourceError;

/// A source of public keys for an account.
///
/// This trait abstracts over the upstream API so that the cache in front of
/// it can be exercised with a fake source in tests.
///
/// # Implementors
///
/// - `GitHubKeySource` - Fetches keys from the GitHub users API
///
/// # Example
///
/// ```ignore
/// use github_keys_source::{KeyRecord, KeySource, KeySourceError};
///
/// struct StaticSource;
///
/// #[async_trait]
/// impl KeySource for StaticSource {
///     async fn fetch(&self, identity: &str) -> Result<Vec<KeyRecord>, KeySourceError> {
///         Ok(vec![KeyRecord::new("ssh-ed25519 AAAA")])
///     }
///
///     fn name(&self) -> &str {
///         "static"
///     }
/// }
/// ```
#[async_trait]
pub trait KeySource: Send + Sync {
    /// Fetches the current keys for `identity`.
    ///
    /// Performs exactly one upstream request. The returned keys keep the
    /// upstream order; an empty list is a valid answer.
    ///
    /// # Errors
    ///
    /// - `KeySourceError::Network` if the upstream could not be reached
    /// - `KeySourceError::Status` if the upstream answered with a non-2xx status
    /// - `KeySourceError::Format` if the body is not a list of key objects
    async fn fetch(&self, identity: &str) -> Result<Vec<KeyRecord>, KeySourceError>;

    /// Returns the name of this key source.
    ///
    /// This is used for logging and identification purposes.
    fn name(&self) -> &str;
}
