//! OpenAI-compatible LLM provider implementation.
//!
//! Talks to OpenAI (or any endpoint speaking the chat completions protocol)
//! through [`async_openai`]. Only the non-streaming path is used.

pub mod config;

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestAssistantMessage, ChatCompletionRequestAssistantMessageContent,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest, FinishReason,
};
use secrecy::ExposeSecret;
use tracing::debug;

use supportdesk_core::llm::provider::LlmProvider;
use supportdesk_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, Message, MessageRole, StopReason, Usage,
};

use self::config::OpenAiCompatConfig;

/// Provider for any OpenAI-compatible API.
///
/// Does not derive Debug: the `async_openai::Client` holds the API key.
pub struct OpenAiCompatibleProvider {
    client: Client<OpenAIConfig>,
    provider_name: String,
    model: String,
}

impl OpenAiCompatibleProvider {
    pub fn new(config: OpenAiCompatConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.api_key.expose_secret().to_string())
            .with_api_base(&config.base_url);

        debug!(
            provider = %config.provider_name,
            base_url = %config.base_url,
            model = %config.model,
            "Created OpenAI-compatible client"
        );

        Self {
            client: Client::with_config(openai_config),
            provider_name: config.provider_name,
            model: config.model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build a [`CreateChatCompletionRequest`] from a generic [`CompletionRequest`].
    fn build_request(&self, request: &CompletionRequest) -> CreateChatCompletionRequest {
        let messages: Vec<ChatCompletionRequestMessage> =
            request.messages.iter().map(to_openai_message).collect();

        let model = if request.model.is_empty() {
            self.model.clone()
        } else {
            request.model.clone()
        };

        CreateChatCompletionRequest {
            model,
            messages,
            max_completion_tokens: Some(request.max_tokens),
            temperature: request.temperature.map(|t| t as f32),
            ..Default::default()
        }
    }
}

fn system_message(content: &str) -> ChatCompletionRequestMessage {
    ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
        content: ChatCompletionRequestSystemMessageContent::Text(content.to_string()),
        name: None,
    })
}

fn to_openai_message(msg: &Message) -> ChatCompletionRequestMessage {
    match msg.role {
        MessageRole::System => system_message(&msg.content),
        MessageRole::User => ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
            content: ChatCompletionRequestUserMessageContent::Text(msg.content.clone()),
            name: None,
        }),
        MessageRole::Assistant => {
            #[allow(deprecated)]
            ChatCompletionRequestMessage::Assistant(ChatCompletionRequestAssistantMessage {
                content: Some(ChatCompletionRequestAssistantMessageContent::Text(
                    msg.content.clone(),
                )),
                refusal: None,
                name: None,
                audio: None,
                tool_calls: None,
                function_call: None,
            })
        }
    }
}

fn map_finish_reason(reason: &FinishReason) -> StopReason {
    match reason {
        FinishReason::Stop => StopReason::EndTurn,
        FinishReason::Length => StopReason::MaxTokens,
        FinishReason::ContentFilter => StopReason::ContentFilter,
        FinishReason::ToolCalls | FinishReason::FunctionCall => StopReason::EndTurn,
    }
}

impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        &self.provider_name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let oai_request = self.build_request(request);

        let response = self
            .client
            .chat()
            .create(oai_request)
            .await
            .map_err(map_openai_error)?;

        let choice = response.choices.first().ok_or(LlmError::EmptyResponse)?;
        let content = choice.message.content.clone().unwrap_or_default();
        let stop_reason = choice
            .finish_reason
            .as_ref()
            .map(map_finish_reason)
            .unwrap_or(StopReason::EndTurn);

        let usage = response
            .usage
            .map(|u| Usage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            id: response.id,
            content,
            model: response.model,
            stop_reason,
            usage,
        })
    }
}

/// Map an `async_openai::error::OpenAIError` to an [`LlmError`].
pub(crate) fn map_openai_error(err: async_openai::error::OpenAIError) -> LlmError {
    use async_openai::error::OpenAIError;

    match &err {
        OpenAIError::ApiError(api_err) => {
            let code = api_err.code.as_deref().unwrap_or("");
            let error_type = api_err.r#type.as_deref().unwrap_or("");

            if code == "invalid_api_key"
                || error_type == "authentication_error"
                || api_err.message.contains("Incorrect API key")
                || api_err.message.contains("Invalid API key")
            {
                LlmError::AuthenticationFailed
            } else if code == "rate_limit_exceeded" || error_type == "rate_limit_error" {
                LlmError::RateLimited {
                    retry_after_ms: None,
                }
            } else if code == "context_length_exceeded"
                || api_err.message.contains("maximum context length")
            {
                LlmError::ContextLengthExceeded {
                    max: 0,
                    requested: 0,
                }
            } else if code == "server_error" || error_type == "overloaded_error" {
                LlmError::Overloaded(api_err.message.clone())
            } else {
                LlmError::Provider {
                    message: err.to_string(),
                }
            }
        }
        OpenAIError::Reqwest(reqwest_err) => match reqwest_err.status().map(|s| s.as_u16()) {
            Some(401) => LlmError::AuthenticationFailed,
            Some(429) => LlmError::RateLimited {
                retry_after_ms: None,
            },
            Some(503) | Some(529) => LlmError::Overloaded(err.to_string()),
            _ => LlmError::Provider {
                message: err.to_string(),
            },
        },
        OpenAIError::JSONDeserialize(_, content) => {
            LlmError::Deserialization(format!("failed to parse response: {content}"))
        }
        OpenAIError::InvalidArgument(msg) => LlmError::InvalidRequest(msg.clone()),
        _ => LlmError::Provider {
            message: err.to_string(),
        },
    }
}
