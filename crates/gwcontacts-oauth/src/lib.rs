//! # gwcontacts-oauth
//!
//! `OAuth2` installed-application authorization for Google Workspace APIs.
//!
//! ## Features
//!
//! - **Client credentials**: parses the `credentials.json` downloaded from the
//!   Google Cloud console (`installed` or `web` clients)
//! - **Authorization Code Flow**: offline access, code pasted back on the terminal
//! - **Token cache**: JSON file with owner-only permissions
//! - **Authorized client**: bearer token on every request, transparent refresh
//!
//! ## Quick Start
//!
//! ```ignore
//! use gwcontacts_oauth::{
//!     AuthorizationCodeFlow, ClientCredentials, TerminalPrompt, TokenStore, authorize,
//!     provider::directory_scopes,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ClientCredentials::load("credentials.json".as_ref())?
//!         .into_client(directory_scopes())?;
//!     let flow = AuthorizationCodeFlow::new(client);
//!
//!     // Uses token.json if present, otherwise asks for a code and saves it
//!     let mut authorized = authorize(flow, TokenStore::new("token.json"), &mut TerminalPrompt).await?;
//!
//!     let response = authorized.get("https://people.googleapis.com/v1/people/me".parse()?).await?;
//!     println!("{}", response.status());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod credentials;
mod error;
pub mod flow;
pub mod prompt;
pub mod provider;
pub mod session;
pub mod store;
pub mod token;

pub use credentials::ClientCredentials;
pub use error::{Error, Result};
pub use flow::{AuthorizationCodeFlow, OAuthClient};
pub use prompt::{AuthorizationPrompt, TerminalPrompt, acquire_interactive};
pub use provider::Provider;
pub use session::{AuthorizedClient, authorize};
pub use store::TokenStore;
pub use token::Token;
