//! Interactive authorization.

use std::io::{self, BufRead, Write};

use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::flow::{AUTHORIZATION_STATE, AuthorizationCodeFlow};
use crate::token::Token;

/// Shows the authorization URL to the user and reads back the code.
pub trait AuthorizationPrompt {
    /// Presents `url` and returns the authorization code the user entered.
    ///
    /// # Errors
    ///
    /// Returns an error if no code could be read.
    fn request_code(&mut self, url: &Url) -> io::Result<String>;
}

/// Prompt on the controlling terminal.
///
/// The URL goes to stderr so that alias output on stdout stays clean; the
/// code is read as one line from stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl AuthorizationPrompt for TerminalPrompt {
    fn request_code(&mut self, url: &Url) -> io::Result<String> {
        let mut stderr = io::stderr().lock();
        write!(
            stderr,
            "Go to the following link in your browser then copy back the authorization code:\n{url}\nCode: "
        )?;
        stderr.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "standard input closed",
            ));
        }
        Ok(line.trim().to_string())
    }
}

/// Runs the interactive authorization-code exchange.
///
/// # Errors
///
/// Returns [`Error::MissingCode`] if the prompt fails or yields nothing,
/// or the token endpoint's error if the exchange is rejected.
pub async fn acquire_interactive<P>(flow: &AuthorizationCodeFlow, prompt: &mut P) -> Result<Token>
where
    P: AuthorizationPrompt + ?Sized,
{
    let url = flow.authorization_url(AUTHORIZATION_STATE)?;

    let code = prompt.request_code(&url).map_err(|e| {
        debug!("Authorization prompt failed: {e}");
        Error::MissingCode
    })?;

    flow.exchange_code(&code).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::flow::OAuthClient;
    use crate::provider::Provider;

    struct Unreadable;

    impl AuthorizationPrompt for Unreadable {
        fn request_code(&mut self, _url: &Url) -> io::Result<String> {
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "closed"))
        }
    }

    #[tokio::test]
    async fn test_unreadable_code_is_authorization_error() {
        let provider = Provider::new("https://auth.example.com", "https://auth.example.com/token")
            .unwrap();
        let flow = AuthorizationCodeFlow::new(OAuthClient::new("id", provider));

        let err = acquire_interactive(&flow, &mut Unreadable).await.unwrap_err();
        assert!(matches!(err, Error::MissingCode));
    }
}
