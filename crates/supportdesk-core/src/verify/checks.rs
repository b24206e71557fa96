//! Individual readiness checks.
//!
//! Each check takes everything it inspects as an argument and returns a
//! [`CheckResult`]; nothing here reads ambient process state.

use std::future::Future;

use semver::Version;
use tracing::debug;

use supportdesk_types::check::{CheckDetail, CheckResult, CheckStatus};
use supportdesk_types::llm::LlmError;
use supportdesk_types::secret::{Redacted, SecretKey};

pub const TOOLCHAIN_CHECK: &str = "Toolchain Version";
pub const DEPENDENCIES_CHECK: &str = "Dependencies";
pub const CREDENTIAL_CHECK: &str = "API Key";
pub const CONNECTIVITY_CHECK: &str = "API Connection";

/// Where to obtain an API key, shown when none is configured.
pub const API_KEYS_URL: &str = "https://platform.openai.com/api-keys";

/// A runtime dependency that can be located or initialised on demand.
pub trait DependencyProbe: Send + Sync {
    /// Display name (e.g., "HTTP client (TLS)").
    fn name(&self) -> &str;

    /// `Err` carries a short reason the dependency is unavailable.
    fn probe(&self) -> Result<(), String>;
}

/// Builds an API client from a credential, optionally exercising it.
pub trait ClientConnector: Send + Sync {
    /// On success returns a short description of what was connected to.
    fn connect(
        &self,
        credential: &Redacted,
    ) -> impl Future<Output = Result<String, LlmError>> + Send;
}

/// Passes if the toolchain the binary was built with is at least `minimum`.
pub fn check_toolchain(actual: &Version, minimum: &Version) -> CheckResult {
    let meets = Version::new(actual.major, actual.minor, actual.patch) >= *minimum;
    debug!(%actual, %minimum, meets, "Toolchain version check");

    if meets {
        CheckResult::new(TOOLCHAIN_CHECK, CheckStatus::Passed)
            .with_detail(CheckDetail::ok(format!("rustc {actual} (Good!)")))
    } else {
        CheckResult::new(TOOLCHAIN_CHECK, CheckStatus::Failed).with_detail(CheckDetail::error(
            format!(
                "rustc {}.{} (Need {}.{}+)",
                actual.major, actual.minor, minimum.major, minimum.minor
            ),
        ))
    }
}

/// Runs every probe; one failing dependency never stops the others.
pub fn check_dependencies(probes: &[Box<dyn DependencyProbe>]) -> CheckResult {
    let mut details = Vec::with_capacity(probes.len());
    let mut all_present = true;

    for probe in probes {
        match probe.probe() {
            Ok(()) => details.push(CheckDetail::ok(probe.name())),
            Err(reason) => {
                debug!(dependency = probe.name(), %reason, "Dependency unavailable");
                all_present = false;
                details.push(CheckDetail::error(format!("{} (Not available: {reason})", probe.name())));
            }
        }
    }

    let status = if all_present {
        CheckStatus::Passed
    } else {
        CheckStatus::Failed
    };
    CheckResult {
        name: DEPENDENCIES_CHECK.to_string(),
        status,
        details,
    }
}

/// Passes if a non-empty credential was resolved. Shows it masked.
pub fn check_credential(key: &SecretKey, credential: Option<&Redacted>) -> CheckResult {
    match credential.filter(|c| !c.expose().trim().is_empty()) {
        Some(value) => CheckResult::new(CREDENTIAL_CHECK, CheckStatus::Passed)
            .with_detail(CheckDetail::ok(format!("API Key Found: {}", value.masked()))),
        None => CheckResult::new(CREDENTIAL_CHECK, CheckStatus::Failed)
            .with_detail(CheckDetail::error("API Key Not Found"))
            .with_detail(CheckDetail::hint("Create a .env file in this directory"))
            .with_detail(CheckDetail::hint(format!("Add: {key}=your_key_here")))
            .with_detail(CheckDetail::hint(format!("Get a key at: {API_KEYS_URL}"))),
    }
}

/// Skipped without a credential; otherwise passes if the connector succeeds.
pub async fn check_connectivity<C: ClientConnector>(
    credential: Option<&Redacted>,
    connector: &C,
) -> CheckResult {
    let Some(credential) = credential.filter(|c| !c.expose().trim().is_empty()) else {
        return CheckResult::new(CONNECTIVITY_CHECK, CheckStatus::Skipped).with_detail(
            CheckDetail::warning("API Key not available, skipping connection test"),
        );
    };

    match connector.connect(credential).await {
        Ok(target) => CheckResult::new(CONNECTIVITY_CHECK, CheckStatus::Passed)
            .with_detail(CheckDetail::ok(format!("OpenAI API Connection Successful ({target})"))),
        Err(e) => CheckResult::new(CONNECTIVITY_CHECK, CheckStatus::Failed)
            .with_detail(CheckDetail::error(format!("Connection Failed: {e}"))),
    }
}
