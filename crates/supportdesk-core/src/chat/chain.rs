//! The support chain: template rendering, history, and one model call.
//!
//! Each run sends the accumulated history followed by the rendered template
//! as the final user message. History is updated only when the call succeeds.

use tracing::{Instrument, debug, info, info_span};

use supportdesk_types::config::SupportConfig;
use supportdesk_types::llm::{CompletionRequest, CompletionResponse, LlmError, Message};

use crate::llm::provider::LlmProvider;

use super::history::ConversationHistory;
use super::prompt::PromptTemplate;

/// Request parameters that stay fixed for the whole session.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainSettings {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    /// Log every composed prompt at info level.
    pub verbose: bool,
}

impl From<&SupportConfig> for ChainSettings {
    fn from(config: &SupportConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            verbose: config.verbose_chain,
        }
    }
}

/// Composes template, history, and provider into a single conversational call.
pub struct SupportChain<P> {
    provider: P,
    template: PromptTemplate,
    history: ConversationHistory,
    settings: ChainSettings,
}

impl<P: LlmProvider> SupportChain<P> {
    pub fn new(provider: P, template: PromptTemplate, settings: ChainSettings) -> Self {
        Self {
            provider,
            template,
            history: ConversationHistory::new(),
            settings,
        }
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Build the request for `input` without sending it.
    pub fn build_request(&self, input: &str) -> CompletionRequest {
        let mut messages = self.history.messages();
        messages.push(Message::user(self.template.render(input)));

        CompletionRequest {
            model: self.settings.model.clone(),
            messages,
            max_tokens: self.settings.max_tokens,
            temperature: Some(self.settings.temperature),
        }
    }

    /// Send `input` to the model.
    ///
    /// On success the raw input and the reply are appended to history. On
    /// failure history is left untouched and the error is returned.
    pub async fn run(&mut self, input: &str) -> Result<CompletionResponse, LlmError> {
        let request = self.build_request(input);

        if self.settings.verbose {
            let prompt = request.messages.last().map(|m| m.content.as_str()).unwrap_or_default();
            info!(
                target: "supportdesk::prompt",
                history_turns = self.history.turns(),
                "Prompt after formatting:\n{prompt}"
            );
        }

        let span = info_span!(
            "gen_ai.chat",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = request.max_tokens,
            gen_ai.request.temperature = ?request.temperature,
        );

        let response = self.provider.complete(&request).instrument(span).await?;

        debug!(
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            stop_reason = %response.stop_reason,
            "Exchange complete"
        );

        self.history.record_exchange(input, response.content.clone());
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::mock::{Scripted, ScriptedProvider};
    use supportdesk_types::llm::MessageRole;

    fn chain(provider: ScriptedProvider) -> SupportChain<ScriptedProvider> {
        SupportChain::new(
            provider,
            PromptTemplate::support_agent(),
            ChainSettings::from(&SupportConfig::default()),
        )
    }

    #[test]
    fn test_settings_from_config() {
        let settings = ChainSettings::from(&SupportConfig::default());
        assert_eq!(settings.model, "gpt-3.5-turbo");
        assert!((settings.temperature - 0.7).abs() < f64::EPSILON);
        assert!(!settings.verbose);
    }

    #[test]
    fn test_first_request_is_rendered_template_only() {
        let chain = chain(ScriptedProvider::replying([]));
        let request = chain.build_request("Where is my order?");
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, MessageRole::User);
        assert!(request.messages[0].content.ends_with("Where is my order?"));
        assert_eq!(request.temperature, Some(0.7));
    }

    #[tokio::test]
    async fn test_success_appends_user_and_reply() {
        let mut chain = chain(ScriptedProvider::replying(["Let me check that for you."]));

        let response = chain.run("Where is my order?").await.unwrap();

        assert_eq!(response.content, "Let me check that for you.");
        assert_eq!(chain.history().len(), 2);
        let messages = chain.history().messages();
        assert_eq!(messages[0], Message::user("Where is my order?"));
        assert_eq!(messages[1], Message::assistant("Let me check that for you."));
    }

    #[tokio::test]
    async fn test_failure_leaves_history_unchanged() {
        let mut chain = chain(ScriptedProvider::new([
            Scripted::Reply("Sure.".into()),
            Scripted::Network("connection reset".into()),
        ]));

        chain.run("hello").await.unwrap();
        let err = chain.run("are you there?").await.unwrap_err();

        assert!(err.to_string().contains("connection reset"));
        assert_eq!(chain.history().len(), 2);
        assert_eq!(chain.history().turns(), 1);
    }

    #[tokio::test]
    async fn test_history_is_sent_before_new_prompt() {
        let mut chain = chain(ScriptedProvider::replying(["Hi!", "Try restarting it."]));

        chain.run("hello").await.unwrap();
        chain.run("my laptop is slow").await.unwrap();

        let request = chain.provider().last_request().unwrap();
        assert_eq!(request.messages.len(), 3);
        assert_eq!(request.messages[0], Message::user("hello"));
        assert_eq!(request.messages[1], Message::assistant("Hi!"));
        assert!(request.messages[2].content.starts_with("You are a helpful"));
        assert!(request.messages[2].content.ends_with("my laptop is slow"));
        assert_eq!(chain.history().len(), 4);
    }
}
