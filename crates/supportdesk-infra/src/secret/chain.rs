//! Secret chain builder -- wires concrete providers in priority order.
//!
//! Lives in supportdesk-infra because it assembles concrete providers; the
//! result feeds `SecretService` in supportdesk-core.

use std::path::PathBuf;

use supportdesk_core::repository::secret::DynSecretProvider;
use supportdesk_core::service::secret::SecretService;

use crate::secret::dotenv::DotEnvSecretProvider;
use crate::secret::env::EnvSecretProvider;

/// Build the credential chain: process environment, then the `.env` file.
pub fn build_secret_chain(env_file: impl Into<PathBuf>) -> Vec<DynSecretProvider> {
    vec![
        Box::new(EnvSecretProvider::new()),
        Box::new(DotEnvSecretProvider::new(env_file)),
    ]
}

/// Convenience wrapper returning a ready `SecretService`.
pub fn build_secret_service(env_file: impl Into<PathBuf>) -> SecretService {
    SecretService::new(build_secret_chain(env_file))
}
