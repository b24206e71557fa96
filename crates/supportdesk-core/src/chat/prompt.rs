//! Fixed prompt template with a single `{input}` substitution point.

use supportdesk_types::error::TemplateError;

/// Placeholder replaced by the operator's message.
pub const INPUT_PLACEHOLDER: &str = "{input}";

/// Instruction block wrapped around every customer message.
pub const SUPPORT_AGENT_TEMPLATE: &str = "\
You are a helpful, friendly customer support agent for a tech company.
Your role is to:
- Answer questions about products and services
- Help with troubleshooting
- Be empathetic and professional
- Keep responses concise but helpful

{input}";

/// A template containing exactly one `{input}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    text: String,
}

impl PromptTemplate {
    pub fn new(text: impl Into<String>) -> Result<Self, TemplateError> {
        let text = text.into();
        match text.matches(INPUT_PLACEHOLDER).count() {
            0 => Err(TemplateError::MissingPlaceholder),
            1 => Ok(Self { text }),
            n => Err(TemplateError::RepeatedPlaceholder(n)),
        }
    }

    /// The customer support template used by the chatbot.
    pub fn support_agent() -> Self {
        Self {
            text: SUPPORT_AGENT_TEMPLATE.to_string(),
        }
    }

    /// Substitute `input` verbatim for the placeholder.
    pub fn render(&self, input: &str) -> String {
        self.text.replacen(INPUT_PLACEHOLDER, input, 1)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::support_agent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_template_is_valid() {
        assert!(PromptTemplate::new(SUPPORT_AGENT_TEMPLATE).is_ok());
    }

    #[test]
    fn test_render_appends_message_after_instructions() {
        let rendered = PromptTemplate::support_agent().render("My router keeps rebooting");
        assert!(rendered.starts_with("You are a helpful, friendly customer support agent"));
        assert!(rendered.ends_with("\n\nMy router keeps rebooting"));
        assert!(!rendered.contains(INPUT_PLACEHOLDER));
    }

    #[test]
    fn test_render_does_not_expand_braces_in_input() {
        let template = PromptTemplate::new("Q: {input}").unwrap();
        assert_eq!(template.render("what is {input}?"), "Q: what is {input}?");
    }

    #[test]
    fn test_missing_placeholder_rejected() {
        assert_eq!(
            PromptTemplate::new("no slot here"),
            Err(TemplateError::MissingPlaceholder)
        );
    }

    #[test]
    fn test_repeated_placeholder_rejected() {
        assert_eq!(
            PromptTemplate::new("{input} and {input}"),
            Err(TemplateError::RepeatedPlaceholder(2))
        );
    }
}
