//! Credential resolution service.
//!
//! SecretService resolves a credential through a chain of providers in
//! priority order: process environment first, then the `.env` file.
//!
//! Depends only on supportdesk-types and the provider trait, never on
//! concrete infra implementations.

use tracing::{debug, warn};

use supportdesk_types::secret::{Redacted, SecretKey, SecretSource};

use crate::repository::secret::{DynSecretProvider, SecretProviderDyn};

/// A credential together with the provider it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSecret {
    pub value: Redacted,
    pub source: SecretSource,
}

/// Resolves credentials across several providers. First non-empty match wins.
pub struct SecretService {
    providers: Vec<DynSecretProvider>,
}

impl SecretService {
    /// Providers should be ordered by precedence (highest priority first).
    pub fn new(providers: Vec<DynSecretProvider>) -> Self {
        Self { providers }
    }

    /// Resolve `key`. Empty values count as absent.
    ///
    /// A provider that fails (e.g. an unreadable `.env` file) is logged and
    /// skipped so a broken fallback never hides a working source.
    pub async fn resolve(&self, key: &SecretKey) -> Option<ResolvedSecret> {
        for provider in &self.providers {
            match provider.get_boxed(key).await {
                Ok(Some(value)) if !value.trim().is_empty() => {
                    debug!(key = %key, source = %provider.source(), "Resolved credential");
                    return Some(ResolvedSecret {
                        value: Redacted::new(value),
                        source: provider.source(),
                    });
                }
                Ok(_) => continue,
                Err(e) => {
                    warn!(key = %key, source = %provider.source(), error = %e, "Secret provider failed");
                }
            }
        }
        debug!(key = %key, "Credential not found in any provider");
        None
    }
}
