//! Operator input for the chat loop.
//!
//! [`ChatInput`] wraps `rustyline_async::Readline` for interactive terminals.
//! [`LinesInput`] reads plain lines when stdin is piped or redirected. Both
//! produce the session's [`OperatorInput`] through [`InputSource`].

use std::future::Future;
use std::io::BufRead;

use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};
use tokio::sync::mpsc;

use supportdesk_core::chat::session::OperatorInput;

/// Where operator events come from.
///
/// `read_line` must be cancel-safe: the chat loop polls it while a model
/// call is in flight and drops the future when the reply wins.
pub trait InputSource {
    fn read_line(&mut self) -> impl Future<Output = OperatorInput>;
}

pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Create the input handler with the given prompt.
    ///
    /// The returned `SharedWriter` prints without clobbering the prompt line.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, stdout) = Readline::new(prompt)?;
        Ok((Self { rl }, stdout))
    }

    /// Restore the terminal before the process prints its last lines.
    pub fn flush(&mut self) {
        let _ = self.rl.flush();
    }
}

impl InputSource for ChatInput {
    /// The line is returned untrimmed; the session decides what counts as
    /// empty or as the exit keyword.
    async fn read_line(&mut self) -> OperatorInput {
        let input = map_event(self.rl.readline().await);
        if let OperatorInput::Line(line) = &input {
            if !line.trim().is_empty() {
                self.rl.add_history_entry(line.clone());
            }
        }
        input
    }
}

/// A broken terminal is treated like end of input.
fn map_event(event: Result<ReadlineEvent, ReadlineError>) -> OperatorInput {
    match event {
        Ok(ReadlineEvent::Line(line)) => OperatorInput::Line(line),
        Ok(ReadlineEvent::Eof) => OperatorInput::EndOfInput,
        Ok(ReadlineEvent::Interrupted) => OperatorInput::Interrupt,
        Err(_) => OperatorInput::EndOfInput,
    }
}

/// Line reader for non-interactive stdin.
///
/// Lines are read on a dedicated thread so a blocked read never holds up
/// runtime shutdown. End of stream, or a read error, ends input.
pub struct LinesInput {
    lines: mpsc::UnboundedReceiver<String>,
}

impl LinesInput {
    pub fn spawn<R: BufRead + Send + 'static>(reader: R) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        std::thread::spawn(move || {
            for line in reader.lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read input");
                        break;
                    }
                }
            }
        });
        Self { lines: rx }
    }
}

impl InputSource for LinesInput {
    async fn read_line(&mut self) -> OperatorInput {
        match self.lines.recv().await {
            Some(line) => OperatorInput::Line(line),
            None => OperatorInput::EndOfInput,
        }
    }
}
