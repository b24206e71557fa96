//! Configuration for the OpenAI-compatible provider.

use secrecy::SecretString;

use supportdesk_types::config::{DEFAULT_BASE_URL, SupportConfig};

/// Everything needed to build an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Human-readable provider name used in logs and spans.
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    pub api_key: SecretString,
    /// Default model when a request leaves it empty.
    pub model: String,
}

/// Provider name derived from the endpoint: "openai" for the public API.
pub fn provider_name_for(base_url: &str) -> String {
    if base_url.trim_end_matches('/') == DEFAULT_BASE_URL {
        "openai".to_string()
    } else {
        "openai_compatible".to_string()
    }
}

impl OpenAiCompatConfig {
    pub fn from_support_config(config: &SupportConfig, api_key: SecretString) -> Self {
        Self {
            provider_name: provider_name_for(&config.base_url),
            base_url: config.base_url.clone(),
            api_key,
            model: config.model.clone(),
        }
    }
}
