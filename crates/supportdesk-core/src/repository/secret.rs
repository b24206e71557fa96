//! Secret provider trait definition.

use std::future::Future;
use std::pin::Pin;

use supportdesk_types::error::SecretError;
use supportdesk_types::secret::{SecretKey, SecretSource};

/// Read-only credential source (process environment, `.env` file).
///
/// `SecretService` chains several providers in priority order.
pub trait SecretProvider: Send + Sync {
    /// Which kind of source this provider reads.
    fn source(&self) -> SecretSource;

    /// Look up a credential. Returns `None` if this provider does not have it.
    fn get(
        &self,
        key: &SecretKey,
    ) -> impl Future<Output = Result<Option<String>, SecretError>> + Send;
}

/// Object-safe version of [`SecretProvider`] with a boxed future.
pub trait SecretProviderDyn: Send + Sync {
    fn source(&self) -> SecretSource;

    fn get_boxed<'a>(
        &'a self,
        key: &'a SecretKey,
    ) -> Pin<Box<dyn Future<Output = Result<Option<String>, SecretError>> + Send + 'a>>;
}

impl<T: SecretProvider> SecretProviderDyn for T {
    fn source(&self) -> SecretSource {
        SecretProvider::source(self)
    }

    fn get_boxed<'a>(
        &'a self,
        key: &'a SecretKey,
    ) -> Pin<Box<dyn Future<Output = Result<Option<String>, SecretError>> + Send + 'a>> {
        Box::pin(self.get(key))
    }
}

/// Type-erased secret provider for building heterogeneous chains.
pub type DynSecretProvider = Box<dyn SecretProviderDyn>;
