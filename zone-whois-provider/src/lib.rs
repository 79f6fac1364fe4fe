//! # zone-whois-provider
//!
//! Client for the UltraDNS management REST API, limited to what a zone
//! inventory needs: authentication, cursor-paginated zone listing and SOA
//! lookups.
//!
//! ## Authentication
//!
//! | Credentials | Behaviour |
//! |-------------|-----------|
//! | [`ProviderCredentials::Password`] | exchanged for a bearer/refresh token pair on first use |
//! | [`ProviderCredentials::Token`] | bearer token used as-is; refresh token optional |
//!
//! A request answered with HTTP 401 triggers one token refresh and a replay.
//! When the refresh token is missing or rejected, password credentials sign in
//! again; token credentials fail with [`ProviderError::InvalidCredentials`].
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zone_whois_provider::{
//!     create_provider, ProviderCredentials, ProviderOptions, ZoneProvider, ZoneType,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(
//!         ProviderCredentials::Token {
//!             access_token: "your-token".to_string(),
//!             refresh_token: None,
//!         },
//!         ProviderOptions::default(),
//!     )?;
//!
//!     provider.authenticate().await?;
//!
//!     for zone in provider.list_all_zones(None, 1000).await? {
//!         let soa = provider.get_soa(&zone.name).await?;
//!         println!("{} {} {}", zone.normalized_name(), zone.zone_type, soa.rdata);
//!     }
//!
//!     let aliases = provider.list_all_zones(Some(ZoneType::Alias), 1000).await?;
//!     println!("{} alias zones", aliases.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError).
//! Transient errors (`NetworkError`, `Timeout`, `RateLimited`) are retried
//! with exponential backoff before they reach the caller.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory function
pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::ZoneProvider;

// Re-export types
pub use types::{
    CursorPage, DEFAULT_BASE_URL, MAX_ZONE_PAGE_SIZE, ProviderCredentials, ProviderOptions,
    ProviderZone, SoaRecord, ZoneQueryParams, ZoneType,
};

// Re-export concrete provider
pub use providers::UltraDnsProvider;
