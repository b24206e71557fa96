//! Runtime probes backing the environment verifier.
//!
//! The toolchain version is captured at build time by `build.rs`. Dependency
//! probes check that the pieces the chatbot needs at runtime can actually be
//! initialised on this machine.

use crossterm::tty::IsTty;
use semver::Version;

use supportdesk_core::verify::{ClientConnector, DependencyProbe};
use supportdesk_types::config::SupportConfig;
use supportdesk_types::llm::LlmError;
use supportdesk_types::secret::Redacted;

use crate::llm::{create_provider, test_provider_connection};

/// Raw `rustc --version` number this binary was compiled with.
pub const RUSTC_VERSION: &str = env!("SUPPORTDESK_RUSTC_VERSION");

/// Compiler version as semver; `0.0.0` if it could not be determined.
pub fn toolchain_version() -> Version {
    Version::parse(RUSTC_VERSION).unwrap_or_else(|e| {
        tracing::debug!(raw = RUSTC_VERSION, error = %e, "Unparseable toolchain version");
        Version::new(0, 0, 0)
    })
}

/// An HTTP client with TLS support can be constructed.
pub struct HttpClientProbe;

impl DependencyProbe for HttpClientProbe {
    fn name(&self) -> &str {
        "HTTP client (TLS)"
    }

    fn probe(&self) -> Result<(), String> {
        reqwest::Client::builder()
            .build()
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

/// An async runtime is driving the current thread.
pub struct TokioRuntimeProbe;

impl DependencyProbe for TokioRuntimeProbe {
    fn name(&self) -> &str {
        "Tokio runtime"
    }

    fn probe(&self) -> Result<(), String> {
        tokio::runtime::Handle::try_current()
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

/// The platform config directory resolves.
pub struct ConfigDirProbe;

impl DependencyProbe for ConfigDirProbe {
    fn name(&self) -> &str {
        "Config directory"
    }

    fn probe(&self) -> Result<(), String> {
        dirs::config_dir()
            .map(|_| ())
            .ok_or_else(|| "no config directory for this platform".to_string())
    }
}

/// Stdin is an interactive terminal, so the chat gets line editing.
pub struct TerminalProbe;

impl DependencyProbe for TerminalProbe {
    fn name(&self) -> &str {
        "Interactive terminal"
    }

    fn probe(&self) -> Result<(), String> {
        stdin_terminal(std::io::stdin().is_tty())
    }
}

fn stdin_terminal(is_tty: bool) -> Result<(), String> {
    if is_tty {
        Ok(())
    } else {
        Err("stdin is not a terminal".to_string())
    }
}

/// The fixed set of runtime dependencies the verifier checks.
pub fn default_probes() -> Vec<Box<dyn DependencyProbe>> {
    vec![
        Box::new(HttpClientProbe),
        Box::new(TokioRuntimeProbe),
        Box::new(ConfigDirProbe),
        Box::new(TerminalProbe),
    ]
}

/// Builds the real provider from configuration. With `ping` it also sends
/// one minimal request.
pub struct OpenAiConnector {
    config: SupportConfig,
    ping: bool,
}

impl OpenAiConnector {
    pub fn new(config: SupportConfig, ping: bool) -> Self {
        Self { config, ping }
    }
}

impl ClientConnector for OpenAiConnector {
    async fn connect(&self, credential: &Redacted) -> Result<String, LlmError> {
        let provider = create_provider(&self.config, credential)?;
        if self.ping {
            test_provider_connection(&provider).await?;
        }
        Ok(format!("{} / {}", provider.name(), self.config.model))
    }
}
