//! Key source configuration.

use serde::{Deserialize, Serialize};

use crate::error::KeySourceError;

/// Placeholder replaced by the account name in the endpoint template.
pub const USERNAME_PLACEHOLDER: &str = "{username}";

/// Default endpoint: the public GitHub users API.
pub const DEFAULT_URL_TEMPLATE: &str = "https://api.github.com/users/{username}/keys";

/// Configuration for the GitHub key source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeySourceConfig {
    /// Endpoint template containing [`USERNAME_PLACEHOLDER`].
    #[serde(default = "default_url_template")]
    url_template: String,

    /// Value of the `User-Agent` header sent upstream.
    #[serde(default = "default_user_agent")]
    user_agent: String,
}

fn default_url_template() -> String {
    DEFAULT_URL_TEMPLATE.to_string()
}

fn default_user_agent() -> String {
    concat!("github-keys/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for KeySourceConfig {
    fn default() -> Self {
        Self {
            url_template: default_url_template(),
            user_agent: default_user_agent(),
        }
    }
}

impl KeySourceConfig {
    /// Creates a new builder for KeySourceConfig.
    pub fn builder() -> KeySourceConfigBuilder {
        KeySourceConfigBuilder::default()
    }

    /// Returns the endpoint template.
    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    /// Returns the user agent.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Builds the request URI for `identity`.
    ///
    /// The identity is percent-encoded so that it always lands in a single
    /// path segment.
    pub fn uri_for(&self, identity: &str) -> String {
        self.url_template
            .replace(USERNAME_PLACEHOLDER, &urlencoding::encode(identity))
    }
}

/// Builder for KeySourceConfig.
#[derive(Debug, Default)]
pub struct KeySourceConfigBuilder {
    url_template: Option<String>,
    user_agent: Option<String>,
}

impl KeySourceConfigBuilder {
    /// Sets the endpoint template.
    pub fn url_template(mut self, template: impl Into<String>) -> Self {
        self.url_template = Some(template.into());
        self
    }

    /// Sets the user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Result<KeySourceConfig, KeySourceError> {
        let url_template = self.url_template.unwrap_or_else(default_url_template);

        if !url_template.contains(USERNAME_PLACEHOLDER) {
            return Err(KeySourceError::invalid_config(format!(
                "URL template must contain {USERNAME_PLACEHOLDER}: {url_template}"
            )));
        }

        if !(url_template.starts_with("http://") || url_template.starts_with("https://")) {
            return Err(KeySourceError::invalid_config(format!(
                "URL template must be an http(s) URL: {url_template}"
            )));
        }

        let user_agent = self.user_agent.unwrap_or_else(default_user_agent);
        if user_agent.trim().is_empty() {
            return Err(KeySourceError::invalid_config("user agent cannot be empty"));
        }

        Ok(KeySourceConfig {
            url_template,
            user_agent,
        })
    }
}
