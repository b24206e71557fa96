//! `.env` file secret provider.
//!
//! Parses the file with `dotenvy` on every lookup and never mutates the
//! process environment. A missing file simply yields no secrets.

use std::path::{Path, PathBuf};

use tracing::debug;

use supportdesk_core::repository::secret::SecretProvider;
use supportdesk_types::error::SecretError;
use supportdesk_types::secret::{SecretKey, SecretSource};

pub struct DotEnvSecretProvider {
    path: PathBuf,
}

impl DotEnvSecretProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lookup(&self, key: &SecretKey) -> Result<Option<String>, SecretError> {
        let entries = match dotenvy::from_path_iter(&self.path) {
            Ok(entries) => entries,
            Err(e) if e.not_found() => {
                debug!(path = %self.path.display(), "No env file");
                return Ok(None);
            }
            Err(e) => return Err(self.file_error(e)),
        };

        // Later assignments win, matching how the file would be sourced.
        let mut found = None;
        for entry in entries {
            let (name, value) = entry.map_err(|e| self.file_error(e))?;
            if name == key.as_str() {
                found = Some(value);
            }
        }
        Ok(found)
    }

    fn file_error(&self, err: dotenvy::Error) -> SecretError {
        SecretError::EnvFile {
            path: self.path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl SecretProvider for DotEnvSecretProvider {
    fn source(&self) -> SecretSource {
        SecretSource::DotEnv
    }

    async fn get(&self, key: &SecretKey) -> Result<Option<String>, SecretError> {
        self.lookup(key)
    }
}
