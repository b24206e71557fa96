//! Environment variable secret provider.
//!
//! Highest-priority provider in the resolution chain: a variable set in the
//! process environment overrides the `.env` file.

use supportdesk_core::repository::secret::SecretProvider;
use supportdesk_types::error::SecretError;
use supportdesk_types::secret::{SecretKey, SecretSource};

/// Reads credentials from the process environment. Never writes to it.
#[derive(Debug, Default)]
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    pub fn new() -> Self {
        Self
    }
}

impl SecretProvider for EnvSecretProvider {
    fn source(&self) -> SecretSource {
        SecretSource::Environment
    }

    async fn get(&self, key: &SecretKey) -> Result<Option<String>, SecretError> {
        match std::env::var(key.as_str()) {
            Ok(val) => Ok(Some(val)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            // Present but not valid Unicode; an API key can't be used anyway.
            Err(std::env::VarError::NotUnicode(_)) => Ok(None),
        }
    }
}
