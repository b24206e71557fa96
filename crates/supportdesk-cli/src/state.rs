//! Startup state shared by both binaries.
//!
//! Configuration and the credential are resolved exactly once, before the
//! first prompt or check, and never change afterwards.

use std::path::Path;

use supportdesk_core::service::secret::ResolvedSecret;
use supportdesk_infra::config::load_support_config;
use supportdesk_infra::secret::chain::build_secret_service;
use supportdesk_types::config::SupportConfig;
use supportdesk_types::secret::SecretKey;

pub struct AppState {
    pub config: SupportConfig,
    /// `None` when neither the environment nor the `.env` file holds a key.
    pub credential: Option<ResolvedSecret>,
}

impl AppState {
    pub async fn init(config_path: Option<&Path>) -> Self {
        let config = load_support_config(config_path).await;
        let secrets = build_secret_service(&config.env_file);
        let credential = secrets.resolve(&SecretKey::new(&config.api_key_env)).await;

        tracing::debug!(
            model = %config.model,
            credential_source = ?credential.as_ref().map(|c| c.source),
            "Startup state resolved"
        );

        Self { config, credential }
    }

    /// Name of the variable the credential is read from.
    pub fn credential_key(&self) -> SecretKey {
        SecretKey::new(&self.config.api_key_env)
    }
}
