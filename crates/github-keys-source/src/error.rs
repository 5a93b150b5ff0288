//! Error types for key sources.

/// Errors that can occur when fetching keys from an upstream source.
#[derive(Debug, thiserror::Error)]
pub enum KeySourceError {
    /// The request could not be completed (connect, reset, body read).
    #[error("request to {uri} failed: {source}")]
    Network {
        uri: String,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered with a non-success status code.
    #[error("upstream {uri} answered with status {status}")]
    Status { uri: String, status: u16 },

    /// The response body did not have the expected shape.
    #[error("unexpected response body from {uri}: {source}")]
    Format {
        uri: String,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl KeySourceError {
    /// Creates a new invalid configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Returns true if the upstream could not be reached or refused the request.
    ///
    /// Non-success status codes count as network errors: a body attached to
    /// an error status is never trusted as a key list.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Status { .. })
    }

    /// Returns true if the upstream answered but the body was malformed.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// Short label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network { .. } | Self::Status { .. } => "network",
            Self::Format { .. } => "format",
            Self::InvalidConfig(_) => "config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format_error() -> KeySourceError {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        KeySourceError::Format {
            uri: "https://example.test/users/octocat/keys".to_string(),
            source,
        }
    }

    #[test]
    fn test_error_display() {
        let err = KeySourceError::Status {
            uri: "https://example.test/users/octocat/keys".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "upstream https://example.test/users/octocat/keys answered with status 404"
        );

        let err = KeySourceError::invalid_config("missing placeholder");
        assert_eq!(err.to_string(), "invalid configuration: missing placeholder");

        assert!(
            format_error()
                .to_string()
                .starts_with("unexpected response body from https://example.test/users/octocat/keys")
        );
    }

    #[test]
    fn test_classification() {
        let status = KeySourceError::Status {
            uri: String::new(),
            status: 503,
        };
        assert!(status.is_network());
        assert!(!status.is_format());
        assert_eq!(status.kind(), "network");

        let format = format_error();
        assert!(format.is_format());
        assert!(!format.is_network());
        assert_eq!(format.kind(), "format");

        assert_eq!(KeySourceError::invalid_config("x").kind(), "config");
    }
}
