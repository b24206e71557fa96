//! Configuration loader.
//!
//! Reads `config.toml` (by default `<config dir>/supportdesk/config.toml`)
//! into [`SupportConfig`], then applies `SUPPORTDESK_*` environment
//! overrides. A missing or malformed file falls back to defaults.

use std::path::{Path, PathBuf};

use supportdesk_types::config::SupportConfig;
use supportdesk_types::error::ConfigError;

pub const MODEL_ENV: &str = "SUPPORTDESK_MODEL";
pub const TEMPERATURE_ENV: &str = "SUPPORTDESK_TEMPERATURE";
pub const BASE_URL_ENV: &str = "SUPPORTDESK_BASE_URL";

/// `<platform config dir>/supportdesk/config.toml`, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("supportdesk").join("config.toml"))
}

/// Read and parse a config file. `Ok(None)` if it does not exist.
pub async fn read_config_file(path: &Path) -> Result<Option<SupportConfig>, ConfigError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                message: err.to_string(),
            });
        }
    };

    toml::from_str::<SupportConfig>(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse {
            path: path.display().to_string(),
            message: err.to_string(),
        })
}

/// Apply `SUPPORTDESK_*` overrides read through `lookup`.
///
/// Invalid values are skipped; each one is returned so the caller can report it.
pub fn apply_env_overrides(
    config: &mut SupportConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Vec<ConfigError> {
    let mut rejected = Vec::new();

    if let Some(model) = lookup(MODEL_ENV).filter(|m| !m.trim().is_empty()) {
        config.model = model.trim().to_string();
    }

    if let Some(raw) = lookup(TEMPERATURE_ENV) {
        match raw.trim().parse::<f64>() {
            Ok(t) if (0.0..=2.0).contains(&t) => config.temperature = t,
            _ => rejected.push(ConfigError::InvalidOverride {
                key: TEMPERATURE_ENV.to_string(),
                value: raw,
            }),
        }
    }

    if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
        config.base_url = url.trim().to_string();
    }

    rejected
}

/// Load configuration from `path` (or the default location) plus the
/// process environment. Never fails: problems are logged and defaults used.
pub async fn load_support_config(path: Option<&Path>) -> SupportConfig {
    let path = path.map(Path::to_path_buf).or_else(default_config_path);

    let mut config = match path.as_deref() {
        Some(path) => match read_config_file(path).await {
            Ok(Some(config)) => {
                tracing::debug!("Loaded config from {}", path.display());
                config
            }
            Ok(None) => {
                tracing::debug!("No config file at {}, using defaults", path.display());
                SupportConfig::default()
            }
            Err(err) => {
                tracing::warn!("{err}, using defaults");
                SupportConfig::default()
            }
        },
        None => {
            tracing::debug!("No platform config directory, using defaults");
            SupportConfig::default()
        }
    };

    for err in apply_env_overrides(&mut config, |key| std::env::var(key).ok()) {
        tracing::warn!("Ignoring override: {err}");
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[tokio::test]
    async fn read_config_file_missing_is_none() {
        let tmp = TempDir::new().unwrap();
        let result = read_config_file(&tmp.path().join("config.toml")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn read_config_file_invalid_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        tokio::fs::write(&path, "this is not { valid toml !!!").await.unwrap();
        let err = read_config_file(&path).await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[tokio::test]
    async fn load_support_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        tokio::fs::write(
            &path,
            r#"
model = "gpt-4o-mini"
temperature = 0.3
env_file = "/etc/supportdesk/.env"
"#,
        )
        .await
        .unwrap();

        let config = load_support_config(Some(&path)).await;
        assert_eq!(config.env_file, "/etc/supportdesk/.env");
        assert_eq!(config.max_tokens, 1024);
    }

    #[tokio::test]
    async fn load_support_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        tokio::fs::write(&path, "temperature = [").await.unwrap();

        let config = load_support_config(Some(&path)).await;
        assert_eq!(config.env_file, SupportConfig::default().env_file);
        assert_eq!(config.api_key_env, "OPENAI_API_KEY");
    }

    #[test]
    fn env_overrides_replace_values() {
        let mut config = SupportConfig::default();
        let rejected = apply_env_overrides(
            &mut config,
            env(&[
                (MODEL_ENV, "gpt-4o"),
                (TEMPERATURE_ENV, "0.1"),
                (BASE_URL_ENV, "http://localhost:8080/v1"),
            ]),
        );
        assert!(rejected.is_empty());
        assert_eq!(config.model, "gpt-4o");
        assert!((config.temperature - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.base_url, "http://localhost:8080/v1");
    }

    #[test]
    fn env_overrides_reject_bad_temperature() {
        let mut config = SupportConfig::default();
        for bad in ["warm", "3.5", "-1"] {
            let rejected = apply_env_overrides(&mut config, env(&[(TEMPERATURE_ENV, bad)]));
            assert_eq!(rejected.len(), 1, "{bad}");
        }
        assert!((config.temperature - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn env_overrides_ignore_blank_values() {
        let mut config = SupportConfig::default();
        apply_env_overrides(&mut config, env(&[(MODEL_ENV, "  ")]));
        assert_eq!(config.model, "gpt-3.5-turbo");
    }
}
