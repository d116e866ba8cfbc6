//! Application client credentials (`credentials.json`).
//!
//! The file is the JSON document downloaded from the Google Cloud console
//! for an OAuth client. Desktop clients put their settings under
//! `installed`, web clients under `web`; both carry the same fields.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::flow::OAuthClient;
use crate::provider::Provider;

/// Contents of a downloaded client credentials file.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientCredentials {
    /// Desktop ("installed application") client settings.
    #[serde(default)]
    pub installed: Option<ClientSecret>,
    /// Web application client settings.
    #[serde(default)]
    pub web: Option<ClientSecret>,
}

/// OAuth client settings from either section of the credentials file.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSecret {
    /// OAuth client identifier.
    pub client_id: String,
    /// OAuth client secret.
    #[serde(default)]
    pub client_secret: Option<String>,
    /// Authorization endpoint.
    pub auth_uri: String,
    /// Token endpoint.
    pub token_uri: String,
    /// Registered redirect URIs; the first one is used.
    #[serde(default)]
    pub redirect_uris: Vec<String>,
}

impl ClientCredentials {
    /// Reads and parses the credentials file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CredentialsNotFound`] if the file does not exist,
    /// or an I/O or JSON error if it cannot be read or decoded.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::CredentialsNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;
        Self::from_json(&content)
    }

    /// Parses credentials from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds an OAuth client requesting `scopes`.
    ///
    /// # Errors
    ///
    /// Returns an error if the client section is missing, has no redirect
    /// URI, or carries invalid endpoint URLs.
    pub fn into_client(self, scopes: Vec<String>) -> Result<OAuthClient> {
        let secret = self
            .installed
            .or(self.web)
            .ok_or_else(missing_client_section)?;

        let redirect_uri = secret
            .redirect_uris
            .into_iter()
            .next()
            .ok_or_else(|| Error::InvalidConfig("missing redirect URL in credentials".into()))?;

        let provider = Provider::new(&secret.auth_uri, &secret.token_uri)?
            .with_default_scopes(scopes);
        provider.validate()?;

        let mut client = OAuthClient::new(secret.client_id, provider).with_redirect_uri(redirect_uri);
        if let Some(client_secret) = secret.client_secret {
            client = client.with_client_secret(client_secret);
        }

        Ok(client)
    }
}

fn missing_client_section() -> Error {
    Error::InvalidConfig("credentials file has no \"installed\" or \"web\" client".into())
}
