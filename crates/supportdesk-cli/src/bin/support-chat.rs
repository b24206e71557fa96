//! support-chat: interactive customer support chatbot.

use clap::Parser;

use supportdesk_cli::cli::ChatCli;
use supportdesk_cli::cli::chat::loop_runner::run_chat;
use supportdesk_cli::state::AppState;
use supportdesk_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = ChatCli::parse();
    let args = cli.common;

    init_tracing(verbosity_filter(args.verbose, args.quiet), args.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let state = AppState::init(args.config.as_deref()).await;
    let result = run_chat(state, args.verbose > 0).await;

    shutdown_tracing();
    result
}
