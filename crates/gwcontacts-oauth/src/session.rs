//! Authorized HTTP access.

use reqwest::Response;
use tracing::{info, warn};
use url::Url;

use crate::error::Result;
use crate::flow::{AuthorizationCodeFlow, OAuthClient};
use crate::prompt::{AuthorizationPrompt, acquire_interactive};
use crate::store::TokenStore;
use crate::token::Token;

/// HTTP client that sends a bearer token with every request.
///
/// An expired token is refreshed before the request goes out and, when a
/// store is attached, the refreshed token is written back to it.
#[derive(Debug)]
pub struct AuthorizedClient {
    oauth: OAuthClient,
    token: Token,
    store: Option<TokenStore>,
}

impl AuthorizedClient {
    /// Creates a client using `token` for requests.
    #[must_use]
    pub const fn new(oauth: OAuthClient, token: Token) -> Self {
        Self {
            oauth,
            token,
            store: None,
        }
    }

    /// Persists refreshed tokens to `store`.
    #[must_use]
    pub fn with_store(mut self, store: TokenStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Returns the current token.
    #[must_use]
    pub const fn token(&self) -> &Token {
        &self.token
    }

    /// Returns a usable access token, refreshing it first if expired.
    ///
    /// # Errors
    ///
    /// Returns an error if the refresh fails or the refreshed token cannot
    /// be saved.
    pub async fn access_token(&mut self) -> Result<&str> {
        if self.token.is_expired() {
            self.refresh().await?;
        }
        Ok(&self.token.access_token)
    }

    /// Sends an authorized GET request.
    ///
    /// The response is returned whatever its status; callers decide how to
    /// treat non-success codes.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be refreshed or the request
    /// cannot be sent.
    pub async fn get(&mut self, url: Url) -> Result<Response> {
        let access_token = self.access_token().await?.to_string();
        let response = self
            .oauth
            .http_client()
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await?;
        Ok(response)
    }

    async fn refresh(&mut self) -> Result<()> {
        info!("Access token expired, refreshing...");
        let token = self.oauth.refresh_token(&self.token).await?;

        if let Some(store) = &self.store {
            info!("Saving refreshed token to: {}", store.path().display());
            store.save(&token)?;
        }

        self.token = token;
        Ok(())
    }
}

/// Returns a client authorized with the cached token, or with a token
/// obtained interactively when the cache is missing or unreadable.
///
/// A freshly obtained token is saved before the client is returned.
///
/// # Errors
///
/// Returns an error if interactive authorization fails or the new token
/// cannot be saved.
pub async fn authorize<P>(
    flow: AuthorizationCodeFlow,
    store: TokenStore,
    prompt: &mut P,
) -> Result<AuthorizedClient>
where
    P: AuthorizationPrompt + ?Sized,
{
    let token = match store.load() {
        Ok(token) => {
            info!("Using cached token from {}", store.path().display());
            token
        }
        Err(e) => {
            if e.is_not_found() {
                info!("No cached token at {}", store.path().display());
            } else {
                warn!("Ignoring unreadable token cache {}: {e}", store.path().display());
            }

            let token = acquire_interactive(&flow, prompt).await?;
            info!("Saving credential file to: {}", store.path().display());
            store.save(&token)?;
            token
        }
    };

    Ok(AuthorizedClient::new(flow.into_client(), token).with_store(store))
}
