//! Command-line arguments for the `support-chat` and `support-verify` binaries.
//!
//! Both binaries have fixed behavior; the flags only tune logging, the config
//! file location and, for the verifier, the report format.

pub mod chat;
pub mod verify;

use std::path::PathBuf;

use clap::{Args, Parser};

/// Flags shared by both binaries.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Suppress all log output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config.toml (defaults to the platform config directory).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Export spans to stdout through OpenTelemetry.
    #[arg(long, env = "SUPPORTDESK_OTEL")]
    pub otel: bool,
}

/// Chat with the customer support agent.
#[derive(Parser, Debug)]
#[command(name = "support-chat", version, about, long_about = None)]
pub struct ChatCli {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Check that everything support-chat needs is in place.
#[derive(Parser, Debug)]
#[command(name = "support-verify", version, about, long_about = None)]
pub struct VerifyCli {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output the report as JSON instead of styled text.
    #[arg(long)]
    pub json: bool,

    /// Send one minimal completion request to confirm the API answers.
    #[arg(long)]
    pub ping: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definitions_are_valid() {
        ChatCli::command().debug_assert();
        VerifyCli::command().debug_assert();
    }

    #[test]
    fn test_chat_verbosity_count() {
        let cli = ChatCli::try_parse_from(["support-chat", "-vv"]).unwrap();
        assert_eq!(cli.common.verbose, 2);
        assert!(!cli.common.quiet);
        assert!(cli.common.config.is_none());
    }

    #[test]
    fn test_verify_flags() {
        let cli = VerifyCli::try_parse_from([
            "support-verify",
            "--json",
            "--ping",
            "--config",
            "/tmp/support.toml",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(cli.ping);
        assert_eq!(cli.common.config, Some(PathBuf::from("/tmp/support.toml")));
    }

    #[test]
    fn test_chat_rejects_verifier_flags() {
        assert!(ChatCli::try_parse_from(["support-chat", "--json"]).is_err());
    }
}
