//! Environment verifier: runs the readiness checks in a fixed order and
//! collects them into a [`CheckReport`].

pub mod checks;

use semver::Version;
use tracing::info;

use supportdesk_types::check::CheckReport;
use supportdesk_types::secret::{Redacted, SecretKey};

pub use checks::{ClientConnector, DependencyProbe};

/// Oldest compiler that builds this workspace (first with edition 2024).
pub const MINIMUM_TOOLCHAIN: Version = Version::new(1, 85, 0);

pub struct Verifier<C> {
    toolchain: Version,
    minimum_toolchain: Version,
    probes: Vec<Box<dyn DependencyProbe>>,
    key: SecretKey,
    credential: Option<Redacted>,
    connector: C,
}

impl<C: ClientConnector> Verifier<C> {
    /// `credential` is whatever the caller resolved for `key`, if anything.
    pub fn new(
        toolchain: Version,
        key: SecretKey,
        credential: Option<Redacted>,
        connector: C,
    ) -> Self {
        Self {
            toolchain,
            minimum_toolchain: MINIMUM_TOOLCHAIN,
            probes: Vec::new(),
            key,
            credential,
            connector,
        }
    }

    pub fn with_probes(mut self, probes: Vec<Box<dyn DependencyProbe>>) -> Self {
        self.probes = probes;
        self
    }

    pub fn with_minimum_toolchain(mut self, minimum: Version) -> Self {
        self.minimum_toolchain = minimum;
        self
    }

    /// Run toolchain, dependency, credential, and connectivity checks in order.
    ///
    /// Connectivity is only attempted when the credential check passed.
    pub async fn run(&self) -> CheckReport {
        let mut report = CheckReport::default();

        report.push(checks::check_toolchain(&self.toolchain, &self.minimum_toolchain));
        report.push(checks::check_dependencies(&self.probes));

        let credential = checks::check_credential(&self.key, self.credential.as_ref());
        let usable = credential.passed().then_some(self.credential.as_ref()).flatten();
        report.push(credential);

        report.push(checks::check_connectivity(usable, &self.connector).await);

        info!(
            passed = report.passed(),
            total = report.total(),
            "Verification finished"
        );
        report
    }
}
