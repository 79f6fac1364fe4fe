//! Provider factory function.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::UltraDnsProvider;
use crate::traits::ZoneProvider;
use crate::types::{ProviderCredentials, ProviderOptions};

/// Creates a [`ZoneProvider`] from credentials and connection options.
///
/// The returned provider is wrapped in `Arc<dyn ZoneProvider>` so services can
/// hold it without knowing the concrete type. No request is sent until the
/// first call.
///
/// # Examples
///
/// ```rust,no_run
/// use zone_whois_provider::{create_provider, ProviderCredentials, ProviderOptions};
///
/// let provider = create_provider(
///     ProviderCredentials::Password {
///         username: "user".to_string(),
///         password: "secret".to_string(),
///     },
///     ProviderOptions::default(),
/// )
/// .unwrap();
/// ```
pub fn create_provider(
    credentials: ProviderCredentials,
    options: ProviderOptions,
) -> Result<Arc<dyn ZoneProvider>> {
    Ok(Arc::new(UltraDnsProvider::new(credentials, options)?))
}
