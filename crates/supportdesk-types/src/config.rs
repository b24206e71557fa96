//! Configuration types for the support chatbot.
//!
//! `SupportConfig` mirrors the optional `config.toml`. Every field has a
//! default so an empty or missing file yields a working configuration.

use serde::{Deserialize, Serialize};

/// Model used when nothing else is configured.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
/// Sampling temperature used when nothing else is configured.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
/// Credential variable read from the environment and the `.env` file.
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
/// OpenAI public API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Startup configuration. Loaded once, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportConfig {
    /// Model identifier sent with every completion request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Upper bound on reply length.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Base URL of the OpenAI-compatible API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Name of the variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Path of the `.env` file consulted after the process environment.
    #[serde(default = "default_env_file")]
    pub env_file: String,

    /// Log the fully composed prompt of every exchange at info level.
    #[serde(default = "default_verbose_chain")]
    pub verbose_chain: bool,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_env_file() -> String {
    ".env".to_string()
}

fn default_verbose_chain() -> bool {
    false
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            env_file: default_env_file(),
            verbose_chain: default_verbose_chain(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_config_default_values() {
        let config = SupportConfig::default();
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert!((config.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.env_file, ".env");
        assert!(!config.verbose_chain);
    }

    #[test]
    fn test_support_config_deserialize_empty() {
        let config: SupportConfig = toml::from_str("").unwrap();
        assert_eq!(config, SupportConfig::default());
    }

    #[test]
    fn test_support_config_deserialize_partial() {
        let toml_str = r#"
model = "gpt-4o-mini"
temperature = 0.2
verbose_chain = true
"#;
        let config: SupportConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model, "gpt-4o-mini");
        assert!((config.temperature - 0.2).abs() < f64::EPSILON);
        assert!(config.verbose_chain);
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_support_config_rejects_wrong_type() {
        let result: Result<SupportConfig, _> = toml::from_str("temperature = \"hot\"");
        assert!(result.is_err());
    }
}
