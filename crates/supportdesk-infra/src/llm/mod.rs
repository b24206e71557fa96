//! LLM provider implementations.
//!
//! [`create_provider`] builds the configured provider behind a
//! [`BoxLlmProvider`]; [`test_provider_connection`] sends one tiny request to
//! confirm the endpoint and key work.

pub mod openai_compat;

use secrecy::SecretString;
use tracing::info;

use supportdesk_core::llm::box_provider::BoxLlmProvider;
use supportdesk_types::config::SupportConfig;
use supportdesk_types::llm::{CompletionRequest, LlmError, Message};
use supportdesk_types::secret::Redacted;

use self::openai_compat::OpenAiCompatibleProvider;
use self::openai_compat::config::OpenAiCompatConfig;

/// Create the chat provider from configuration and a resolved API key.
///
/// # Errors
///
/// `InvalidRequest` if the base URL is not an http(s) URL,
/// `AuthenticationFailed` if the key is blank.
pub fn create_provider(config: &SupportConfig, api_key: &Redacted) -> Result<BoxLlmProvider, LlmError> {
    Ok(BoxLlmProvider::new(create_openai_provider(config, api_key)?))
}

pub(crate) fn create_openai_provider(
    config: &SupportConfig,
    api_key: &Redacted,
) -> Result<OpenAiCompatibleProvider, LlmError> {
    if api_key.expose().trim().is_empty() {
        return Err(LlmError::AuthenticationFailed);
    }
    validate_base_url(&config.base_url)?;

    let secret = SecretString::from(api_key.expose().to_string());
    Ok(OpenAiCompatibleProvider::new(OpenAiCompatConfig::from_support_config(
        config, secret,
    )))
}

fn validate_base_url(base_url: &str) -> Result<(), LlmError> {
    let url = reqwest::Url::parse(base_url)
        .map_err(|e| LlmError::InvalidRequest(format!("invalid base URL '{base_url}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(LlmError::InvalidRequest(format!(
            "unsupported URL scheme '{other}' in base URL"
        ))),
    }
}

/// Send a minimal "Hello" completion capped at 10 tokens.
///
/// # Errors
///
/// Returns the provider error if the endpoint does not answer successfully.
pub async fn test_provider_connection(provider: &BoxLlmProvider) -> Result<(), LlmError> {
    let request = CompletionRequest {
        model: String::new(),
        messages: vec![Message::user("Hello")],
        max_tokens: 10,
        temperature: Some(0.0),
    };
    let response = provider.complete(&request).await?;
    info!(provider = provider.name(), model = %response.model, "Provider connection OK");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_provider_default_config() {
        let provider =
            create_provider(&SupportConfig::default(), &Redacted::new("sk-test-key")).unwrap();
        assert_eq!(provider.name(), "openai");
    }

    #[test]
    fn test_create_provider_custom_base_url() {
        let config = SupportConfig {
            base_url: "http://localhost:11434/v1".to_string(),
            ..Default::default()
        };
        let provider = create_provider(&config, &Redacted::new("local")).unwrap();
        assert_eq!(provider.name(), "openai_compatible");
    }

    #[test]
    fn test_create_provider_blank_key() {
        let result = create_provider(&SupportConfig::default(), &Redacted::new("   "));
        match result {
            Err(LlmError::AuthenticationFailed) => {}
            Err(other) => panic!("Expected AuthenticationFailed, got: {other}"),
            Ok(_) => panic!("Expected error but got Ok"),
        }
    }

    #[test]
    fn test_create_provider_bad_base_url() {
        for base_url in ["not a url", "ftp://example.com/v1"] {
            let config = SupportConfig {
                base_url: base_url.to_string(),
                ..Default::default()
            };
            let result = create_provider(&config, &Redacted::new("sk-test"));
            assert!(matches!(result, Err(LlmError::InvalidRequest(_))), "{base_url}");
        }
    }
}
