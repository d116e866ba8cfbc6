//! `OAuth2` provider configurations.

use crate::error::{Error, Result};
use url::Url;

/// Read-only access to the organization directory.
pub const DIRECTORY_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/directory.readonly";

/// Read-only access to the user's contacts.
pub const CONTACTS_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/contacts.readonly";

/// `OAuth2` provider configuration.
#[derive(Debug, Clone)]
pub struct Provider {
    /// Authorization endpoint URL.
    pub auth_url: Url,
    /// Token endpoint URL.
    pub token_url: Url,
    /// Default scopes.
    pub default_scopes: Vec<String>,
}

impl Provider {
    /// Creates a new provider configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if URLs are invalid.
    pub fn new(auth_url: impl AsRef<str>, token_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            auth_url: Url::parse(auth_url.as_ref())?,
            token_url: Url::parse(token_url.as_ref())?,
            default_scopes: Vec::new(),
        })
    }

    /// Sets the default scopes.
    #[must_use]
    pub fn with_default_scopes(mut self, scopes: Vec<String>) -> Self {
        self.default_scopes = scopes;
        self
    }

    /// Validates that required URLs are usable.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid.
    pub fn validate(&self) -> Result<()> {
        for (field, url) in [("auth_uri", &self.auth_url), ("token_uri", &self.token_url)] {
            if !matches!(url.scheme(), "http" | "https") {
                return Err(Error::InvalidConfig(format!(
                    "{field} must be an http(s) URL, got {url}"
                )));
            }
        }
        Ok(())
    }
}

/// Scopes requested for reading the directory.
#[must_use]
pub fn directory_scopes() -> Vec<String> {
    vec![
        DIRECTORY_READONLY_SCOPE.to_string(),
        CONTACTS_READONLY_SCOPE.to_string(),
    ]
}
