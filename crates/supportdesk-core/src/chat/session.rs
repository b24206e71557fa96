//! Chat session state machine.
//!
//! `AwaitingInput` loops on ordinary messages, empty lines, and failed
//! exchanges. The exit keyword, an interrupt, or end of input moves the
//! session to `Terminated`, after which every event is ignored.

use tracing::{debug, info, warn};

use supportdesk_types::chat::SessionId;
use supportdesk_types::llm::{CompletionResponse, LlmError};

use crate::llm::provider::LlmProvider;

use super::chain::SupportChain;

/// Keyword that ends the session, compared case-insensitively after trimming.
pub const EXIT_KEYWORD: &str = "exit";

/// True if `input` is the exit keyword, ignoring case and surrounding whitespace.
pub fn is_exit_command(input: &str) -> bool {
    input.trim().to_lowercase() == EXIT_KEYWORD
}

/// One event read from the operator's terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatorInput {
    Line(String),
    /// Ctrl+C.
    Interrupt,
    /// Ctrl+D or closed stdin.
    EndOfInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    Terminated,
}

/// What happened in response to one [`OperatorInput`].
#[derive(Debug)]
pub enum TurnOutcome {
    /// Exit keyword entered; the session is over.
    Exit,
    /// Interrupt or end of input; the session is over.
    Interrupted,
    /// Blank line; nothing was sent.
    EmptyInput,
    Reply(CompletionResponse),
    /// The model call failed; history is unchanged and the session continues.
    Failed(LlmError),
    /// The session had already terminated.
    Ignored,
}

pub struct ChatSession<P> {
    id: SessionId,
    chain: SupportChain<P>,
    state: SessionState,
}

impl<P: LlmProvider> ChatSession<P> {
    pub fn new(chain: SupportChain<P>) -> Self {
        Self {
            id: SessionId::new(),
            chain,
            state: SessionState::AwaitingInput,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }

    pub fn chain(&self) -> &SupportChain<P> {
        &self.chain
    }

    /// Advance the state machine by one operator event.
    pub async fn handle(&mut self, input: OperatorInput) -> TurnOutcome {
        if self.is_terminated() {
            return TurnOutcome::Ignored;
        }

        let line = match input {
            OperatorInput::Line(line) => line,
            other => {
                info!(session = %self.id, input = ?other, "Session interrupted");
                self.state = SessionState::Terminated;
                return TurnOutcome::Interrupted;
            }
        };

        if is_exit_command(&line) {
            info!(session = %self.id, turns = self.chain.history().turns(), "Session ended by operator");
            self.state = SessionState::Terminated;
            return TurnOutcome::Exit;
        }

        let message = line.trim();
        if message.is_empty() {
            debug!("Ignoring empty input");
            return TurnOutcome::EmptyInput;
        }

        match self.chain.run(message).await {
            Ok(response) => TurnOutcome::Reply(response),
            Err(e) => {
                warn!(session = %self.id, error = %e, "Model call failed");
                TurnOutcome::Failed(e)
            }
        }
    }
}
