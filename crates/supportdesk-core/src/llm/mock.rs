//! Scripted provider used by the unit tests in this crate.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use supportdesk_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, StopReason, Usage,
};

use super::provider::LlmProvider;

pub(crate) enum Scripted {
    Reply(String),
    Auth,
    Network(String),
}

/// Returns queued outcomes in order; once the queue drains every call fails.
pub(crate) struct ScriptedProvider {
    script: Mutex<VecDeque<Scripted>>,
    calls: AtomicUsize,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedProvider {
    pub(crate) fn new(script: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn replying<const N: usize>(replies: [&str; N]) -> Self {
        Self::new(replies.map(|r| Scripted::Reply(r.to_string())))
    }

    pub(crate) fn failing() -> Self {
        Self::new([Scripted::Auth])
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl Future<Output = Result<CompletionResponse, LlmError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        let next = self.script.lock().unwrap().pop_front();
        let model = request.model.clone();
        async move {
            match next {
                Some(Scripted::Reply(content)) => Ok(CompletionResponse {
                    id: "resp-1".to_string(),
                    content,
                    model,
                    stop_reason: StopReason::EndTurn,
                    usage: Usage {
                        input_tokens: 12,
                        output_tokens: 8,
                    },
                }),
                Some(Scripted::Auth) => Err(LlmError::AuthenticationFailed),
                Some(Scripted::Network(message)) => Err(LlmError::Provider { message }),
                None => Err(LlmError::Provider {
                    message: "script exhausted".to_string(),
                }),
            }
        }
    }
}
