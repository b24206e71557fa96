//! The interactive chat loop.
//!
//! Reads a line, hands it to the [`ChatSession`] state machine, and prints
//! whatever came back. A spinner runs while the model is thinking. Input
//! stays live during a model call: Ctrl+C abandons the call and ends the
//! session, anything else is kept for the next turn.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Context;
use console::style;
use crossterm::style::Color;
use crossterm::tty::IsTty;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use supportdesk_core::chat::chain::{ChainSettings, SupportChain};
use supportdesk_core::chat::history::AI_PREFIX;
use supportdesk_core::chat::prompt::PromptTemplate;
use supportdesk_core::chat::session::{ChatSession, OperatorInput, TurnOutcome, is_exit_command};
use supportdesk_core::llm::provider::LlmProvider;
use supportdesk_infra::llm::create_provider;

use crate::cli::chat::banner::{FAREWELL_LINE, INTERRUPTED_LINE, print_welcome_banner};
use crate::cli::chat::input::{ChatInput, InputSource, LinesInput};
use crate::cli::chat::renderer::{ChatRenderer, stats_footer};
use crate::state::AppState;

pub const THINKING_MESSAGE: &str = "⏳ Thinking...";
pub const EMPTY_INPUT_LINE: &str = "Please enter a message.";
pub const ERROR_HINT_LINE: &str = "Please check your API key and try again.";

/// How a turn left the loop.
#[derive(Debug, PartialEq, Eq)]
pub enum TurnEnd {
    /// Keep prompting. `typed_ahead` is input that arrived during the model
    /// call and must be handled before reading again.
    Continue { typed_ahead: Option<OperatorInput> },
    Stop,
}

/// Run `support-chat` until the operator leaves.
///
/// A missing credential or an unusable provider configuration is a startup
/// error; failures of individual model calls are reported and the loop
/// continues.
pub async fn run_chat(state: AppState, show_stats: bool) -> anyhow::Result<()> {
    let key = state.credential_key();
    let Some(credential) = state.credential else {
        anyhow::bail!(
            "{key} not found in the environment or {}. Run support-verify for setup help.",
            state.config.env_file
        );
    };

    let provider = create_provider(&state.config, &credential.value)
        .with_context(|| format!("could not configure the {} client", state.config.model))?;
    tracing::info!(provider = provider.name(), source = %credential.source, "Provider ready");

    let chain = SupportChain::new(
        provider,
        PromptTemplate::support_agent(),
        ChainSettings::from(&state.config),
    );
    let mut session = ChatSession::new(chain);

    print_welcome_banner(&state.config.model, &session.id().to_string());

    let renderer = ChatRenderer::new(Color::Cyan);

    if std::io::stdin().is_tty() {
        let prompt = format!("{} ", style("You:").green().bold());
        let (mut input, mut writer) =
            ChatInput::new(prompt).context("terminal input unavailable")?;
        let result = drive(&mut session, &mut input, &mut writer, &renderer, show_stats).await;
        input.flush();
        result?;
    } else {
        debug!("stdin is not a terminal, reading plain lines");
        let mut input = LinesInput::spawn(std::io::BufReader::new(std::io::stdin()));
        drive(&mut session, &mut input, &mut std::io::stdout(), &renderer, show_stats).await?;
    }

    Ok(())
}

/// Feed events from `source` through the session until it terminates.
pub async fn drive<P: LlmProvider, S: InputSource, W: Write>(
    session: &mut ChatSession<P>,
    source: &mut S,
    out: &mut W,
    renderer: &ChatRenderer,
    show_stats: bool,
) -> io::Result<()> {
    let mut pending = None;
    loop {
        let line = match pending.take() {
            Some(line) => line,
            None => next_event(source).await,
        };
        match run_turn(session, line, source, out, renderer, show_stats).await? {
            TurnEnd::Continue { typed_ahead } => pending = typed_ahead,
            TurnEnd::Stop => return Ok(()),
        }
    }
}

/// Next operator event. SIGINT counts as an interrupt for piped input,
/// where the terminal is not in raw mode.
async fn next_event<S: InputSource>(source: &mut S) -> OperatorInput {
    tokio::select! {
        input = source.read_line() => input,
        _ = tokio::signal::ctrl_c() => OperatorInput::Interrupt,
    }
}

/// Process one operator event and print its outcome to `out`.
///
/// While the model call runs, `source` is polled once: an interrupt abandons
/// the call, any other event is returned as `typed_ahead`.
pub async fn run_turn<P: LlmProvider, S: InputSource, W: Write>(
    session: &mut ChatSession<P>,
    line: OperatorInput,
    source: &mut S,
    out: &mut W,
    renderer: &ChatRenderer,
    show_stats: bool,
) -> io::Result<TurnEnd> {
    let calls_model = will_call_model(&line);
    let spinner = calls_model.then(thinking_spinner);
    let started = Instant::now();
    let mut typed_ahead = None;

    let finished = {
        let handle = session.handle(line);
        tokio::pin!(handle);
        loop {
            tokio::select! {
                outcome = &mut handle => break Some(outcome),
                input = next_event(source), if calls_model && typed_ahead.is_none() => match input {
                    OperatorInput::Interrupt => break None,
                    other => typed_ahead = Some(other),
                },
            }
        }
    };

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let outcome = match finished {
        Some(outcome) => outcome,
        None => {
            debug!("Model call abandoned by operator");
            session.handle(OperatorInput::Interrupt).await
        }
    };

    let elapsed_ms = started.elapsed().as_millis() as u64;
    write_outcome(out, &outcome, renderer, show_stats.then_some(elapsed_ms))?;
    out.flush()?;

    Ok(match outcome {
        TurnOutcome::Exit | TurnOutcome::Interrupted | TurnOutcome::Ignored => TurnEnd::Stop,
        _ => TurnEnd::Continue { typed_ahead },
    })
}

/// Print the operator-facing text for `outcome`.
///
/// `elapsed_ms` is set when the stats footer should follow a reply.
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &TurnOutcome,
    renderer: &ChatRenderer,
    elapsed_ms: Option<u64>,
) -> io::Result<()> {
    match outcome {
        TurnOutcome::Exit => writeln!(out, "\n{FAREWELL_LINE}"),
        TurnOutcome::Interrupted => writeln!(out, "\n\n{INTERRUPTED_LINE}"),
        TurnOutcome::EmptyInput => writeln!(out, "{EMPTY_INPUT_LINE}\n"),
        TurnOutcome::Reply(response) => {
            writeln!(
                out,
                "\n{} {}",
                style(format!("{AI_PREFIX}:")).cyan().bold(),
                renderer.render(&response.content).trim_end()
            )?;
            if let Some(ms) = elapsed_ms {
                let tokens = response.usage.input_tokens + response.usage.output_tokens;
                writeln!(out, "{}", stats_footer(tokens, ms, &response.model))?;
            }
            writeln!(out)
        }
        TurnOutcome::Failed(e) => {
            writeln!(out, "\n{} Error: {e}", style("❌").red())?;
            writeln!(out, "{ERROR_HINT_LINE}\n")
        }
        TurnOutcome::Ignored => Ok(()),
    }
}

fn will_call_model(line: &OperatorInput) -> bool {
    matches!(line, OperatorInput::Line(l) if !l.trim().is_empty() && !is_exit_command(l))
}

fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(THINKING_MESSAGE);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
