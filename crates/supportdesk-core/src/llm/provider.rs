//! LlmProvider trait definition.
//!
//! The abstraction every model backend implements. Uses RPITIT for
//! `complete`; [`super::box_provider::BoxLlmProvider`] recovers dynamic dispatch.

use supportdesk_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for LLM provider backends.
///
/// Implementations live in supportdesk-infra (e.g., `OpenAiCompatibleProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
