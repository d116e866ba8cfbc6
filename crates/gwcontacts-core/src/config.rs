//! Per-user file locations.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result};

/// Directory name under the user configuration root.
pub const APP_DIR_NAME: &str = "google-workspace-contacts";

/// Client credentials file name.
pub const CREDENTIALS_FILE: &str = "credentials.json";

/// Token cache file name.
pub const TOKEN_FILE: &str = "token.json";

#[cfg(unix)]
const DIR_MODE: u32 = 0o700;

/// Locations of the credentials and token files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    config_dir: PathBuf,
}

impl AppPaths {
    /// Uses `config_dir` as the application directory.
    #[must_use]
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Resolves the application directory under the user's config root
    /// (`$XDG_CONFIG_HOME` or `~/.config` on Linux).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform has no user configuration directory.
    pub fn from_user_config_dir() -> Result<Self> {
        let root = dirs::config_dir()
            .ok_or_else(|| Error::Config("unable to determine user config directory".into()))?;
        Ok(Self::new(root.join(APP_DIR_NAME)))
    }

    /// Application directory.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of `credentials.json`.
    #[must_use]
    pub fn credentials_file(&self) -> PathBuf {
        self.config_dir.join(CREDENTIALS_FILE)
    }

    /// Path of `token.json`.
    #[must_use]
    pub fn token_file(&self) -> PathBuf {
        self.config_dir.join(TOKEN_FILE)
    }

    /// Creates the application directory (owner-only on Unix) if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_config_dir(&self) -> Result<()> {
        let mut builder = std::fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DIR_MODE);
        }
        builder.create(&self.config_dir)?;
        debug!("Config directory: {}", self.config_dir.display());
        Ok(())
    }
}
