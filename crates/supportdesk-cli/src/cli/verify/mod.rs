//! `support-verify`: readiness checks for the chat binary's environment.

pub mod report;

use supportdesk_core::verify::Verifier;
use supportdesk_infra::probe::{OpenAiConnector, default_probes, toolchain_version};
use supportdesk_types::check::CheckReport;

use crate::state::AppState;

/// Run every check against the resolved startup state.
pub async fn run_checks(state: AppState, ping: bool) -> CheckReport {
    let key = state.credential_key();
    let credential = state.credential.map(|c| c.value);
    let connector = OpenAiConnector::new(state.config, ping);

    Verifier::new(toolchain_version(), key, credential, connector)
        .with_probes(default_probes())
        .run()
        .await
}

/// Run the checks and print the report. Check failures are part of the
/// report, not an error.
pub async fn run_verify(state: AppState, ping: bool, json: bool) -> anyhow::Result<()> {
    let report = run_checks(state, ping).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&report::render_json(&report))?);
    } else {
        print!("{}", report::render_text(&report));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use supportdesk_core::verify::checks::{CONNECTIVITY_CHECK, CREDENTIAL_CHECK};
    use supportdesk_types::check::CheckStatus;
    use supportdesk_types::config::SupportConfig;
    use supportdesk_core::service::secret::ResolvedSecret;
    use supportdesk_types::secret::{Redacted, SecretSource};

    #[tokio::test]
    async fn test_missing_credential_skips_connection() {
        let state = AppState {
            config: SupportConfig::default(),
            credential: None,
        };
        let report = run_checks(state, false).await;

        let credential = report.results.iter().find(|r| r.name == CREDENTIAL_CHECK).unwrap();
        assert_eq!(credential.status, CheckStatus::Failed);
        let connection = report.results.iter().find(|r| r.name == CONNECTIVITY_CHECK).unwrap();
        assert_eq!(connection.status, CheckStatus::Skipped);
        assert!(!report.all_passed());
        assert_eq!(report.results.len(), 4);
    }

    #[tokio::test]
    async fn test_credential_builds_client_without_network() {
        let state = AppState {
            config: SupportConfig::default(),
            credential: Some(ResolvedSecret {
                value: Redacted::new("sk-test-0123456789abcdef"),
                source: SecretSource::Environment,
            }),
        };
        let report = run_checks(state, false).await;

        let connection = report.results.iter().find(|r| r.name == CONNECTIVITY_CHECK).unwrap();
        assert_eq!(connection.status, CheckStatus::Passed);
        let credential = report.results.iter().find(|r| r.name == CREDENTIAL_CHECK).unwrap();
        assert!(credential.details[0].message.contains("sk-test-"));
        assert!(!credential.details[0].message.contains("0123456789ab"));
    }
}
