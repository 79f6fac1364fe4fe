//! WHOIS resolver abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::WhoisSummary;

/// WHOIS Resolver Trait
///
/// Looks up registrar and expiration of a domain. The report treats any error
/// as "not found", so implementations need not retry.
#[async_trait]
pub trait WhoisResolver: Send + Sync {
    /// Look up a domain
    ///
    /// # Arguments
    /// * `domain` - Domain name without trailing dot
    async fn lookup(&self, domain: &str) -> CoreResult<WhoisSummary>;
}
