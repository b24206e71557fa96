//! Readiness check results produced by the environment verifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single readiness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Passed,
    Failed,
    /// The check was not attempted. Excluded from the summary counts.
    Skipped,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Passed => write!(f, "PASS"),
            CheckStatus::Failed => write!(f, "FAIL"),
            CheckStatus::Skipped => write!(f, "SKIPPED"),
        }
    }
}

/// Severity of a detail line attached to a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailKind {
    Ok,
    Error,
    Warning,
    /// Remediation hint printed under a failure.
    Hint,
}

/// A line of output explaining a check's outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckDetail {
    pub kind: DetailKind,
    pub message: String,
}

impl CheckDetail {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            kind: DetailKind::Ok,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: DetailKind::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: DetailKind::Warning,
            message: message.into(),
        }
    }

    pub fn hint(message: impl Into<String>) -> Self {
        Self {
            kind: DetailKind::Hint,
            message: message.into(),
        }
    }
}

/// Named result of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    #[serde(default)]
    pub details: Vec<CheckDetail>,
}

impl CheckResult {
    pub fn new(name: impl Into<String>, status: CheckStatus) -> Self {
        Self {
            name: name.into(),
            status,
            details: Vec::new(),
        }
    }

    pub fn with_detail(mut self, detail: CheckDetail) -> Self {
        self.details.push(detail);
        self
    }

    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Passed
    }
}

/// Ordered results of a verifier run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckReport {
    pub results: Vec<CheckResult>,
}

impl CheckReport {
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Number of checks that passed.
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    /// Number of checks that were actually executed (skips excluded).
    pub fn total(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status != CheckStatus::Skipped)
            .count()
    }

    /// True when every executed check passed.
    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(statuses: &[CheckStatus]) -> CheckReport {
        CheckReport {
            results: statuses
                .iter()
                .enumerate()
                .map(|(i, s)| CheckResult::new(format!("check {i}"), *s))
                .collect(),
        }
    }

    #[test]
    fn test_skipped_excluded_from_counts() {
        let report = report(&[
            CheckStatus::Passed,
            CheckStatus::Passed,
            CheckStatus::Failed,
            CheckStatus::Skipped,
        ]);
        assert_eq!(report.passed(), 2);
        assert_eq!(report.total(), 3);
        assert!(!report.all_passed());
    }

    #[test]
    fn test_all_passed_with_skip() {
        let report = report(&[CheckStatus::Passed, CheckStatus::Skipped]);
        assert_eq!(report.total(), 1);
        assert!(report.all_passed());
    }

    #[test]
    fn test_check_status_display() {
        assert_eq!(CheckStatus::Passed.to_string(), "PASS");
        assert_eq!(CheckStatus::Failed.to_string(), "FAIL");
        assert_eq!(CheckStatus::Skipped.to_string(), "SKIPPED");
    }

    #[test]
    fn test_check_result_serde() {
        let result = CheckResult::new("API Key", CheckStatus::Failed)
            .with_detail(CheckDetail::hint("Create a .env file in this directory"));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["details"][0]["kind"], "hint");
    }
}
