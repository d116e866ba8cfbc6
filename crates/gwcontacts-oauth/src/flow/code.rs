//! Authorization Code Flow implementation.

use super::OAuthClient;
use crate::error::{Error, Result};
use crate::token::Token;
use url::Url;

/// State value sent with the authorization request.
pub const AUTHORIZATION_STATE: &str = "state-token";

/// Authorization Code Flow for `OAuth2`.
///
/// The user opens the authorization URL in a browser, grants access, and
/// pastes the resulting code back into the terminal.
#[derive(Debug)]
pub struct AuthorizationCodeFlow {
    client: OAuthClient,
}

impl AuthorizationCodeFlow {
    /// Creates a new authorization code flow.
    #[must_use]
    pub const fn new(client: OAuthClient) -> Self {
        Self { client }
    }

    /// Consumes the flow, returning the OAuth client.
    #[must_use]
    pub fn into_client(self) -> OAuthClient {
        self.client
    }

    /// Builds the authorization URL for user consent.
    ///
    /// Offline access is always requested so that the server issues a
    /// refresh token alongside the access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be constructed.
    pub fn authorization_url(&self, state: &str) -> Result<Url> {
        let mut url = self.client.provider.auth_url.clone();

        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("client_id", &self.client.client_id)
                .append_pair("response_type", "code");

            if let Some(redirect_uri) = &self.client.redirect_uri {
                pairs.append_pair("redirect_uri", redirect_uri);
            }

            let scope_str = self.client.provider.default_scopes.join(" ");
            if !scope_str.is_empty() {
                pairs.append_pair("scope", &scope_str);
            }

            pairs
                .append_pair("state", state)
                .append_pair("access_type", "offline");
        }

        Ok(url)
    }

    /// Exchanges the authorization code for an access token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCode`] for a blank code, otherwise an error
    /// if the token exchange fails.
    pub async fn exchange_code(&self, code: &str) -> Result<Token> {
        let code = code.trim();
        if code.is_empty() {
            return Err(Error::MissingCode);
        }
        self.client.exchange_code(code).await
    }
}
