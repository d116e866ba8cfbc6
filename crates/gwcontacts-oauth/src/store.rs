//! File-backed token cache.
//!
//! The token is written as plain JSON. Anyone able to read the file can use
//! the refresh token until it is revoked, so the file is created readable
//! and writable by its owner only.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::token::Token;

/// Permission bits for the cache file.
#[cfg(unix)]
const FILE_MODE: u32 = 0o600;

/// Token cache stored at a fixed path.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Creates a store for the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the cache file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the cached token.
    ///
    /// Expiry is not checked; an expired token is returned as is and is
    /// refreshed when it is first used.
    ///
    /// # Errors
    ///
    /// Returns an I/O error (kind `NotFound` when the file is absent) or a
    /// JSON error when the contents do not decode into a token.
    pub fn load(&self) -> Result<Token> {
        let content = std::fs::read(&self.path)?;
        let token = serde_json::from_slice(&content)?;
        debug!("Loaded token from {}", self.path.display());
        Ok(token)
    }

    /// Writes `token` to the cache, replacing any previous contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self, token: &Token) -> Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }

        let mut file = options.open(&self.path)?;
        let mut json = serde_json::to_vec(token)?;
        json.push(b'\n');
        file.write_all(&json)?;
        file.flush()?;

        debug!("Saved token to {}", self.path.display());
        Ok(())
    }
}
