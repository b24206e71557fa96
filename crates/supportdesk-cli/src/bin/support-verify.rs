//! support-verify: checks that support-chat can run in this environment.

use clap::Parser;

use supportdesk_cli::cli::VerifyCli;
use supportdesk_cli::cli::verify::run_verify;
use supportdesk_cli::state::AppState;
use supportdesk_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = VerifyCli::parse();
    let args = &cli.common;

    init_tracing(verbosity_filter(args.verbose, args.quiet), args.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let state = AppState::init(args.config.as_deref()).await;
    let result = run_verify(state, cli.ping, cli.json).await;

    shutdown_tracing();
    result
}
