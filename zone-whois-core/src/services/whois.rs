//! WHOIS 解析器（基于 zone-whois-toolbox）

use std::time::Duration;

use async_trait::async_trait;
use zone_whois_toolbox::{DEFAULT_WHOIS_TIMEOUT, ToolboxService};

use crate::error::CoreResult;
use crate::traits::WhoisResolver;
use crate::types::{NOT_FOUND, WhoisSummary};

/// [`WhoisResolver`] backed by public WHOIS servers.
pub struct ToolboxWhoisResolver {
    timeout: Duration,
}

impl ToolboxWhoisResolver {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for ToolboxWhoisResolver {
    fn default() -> Self {
        Self::new(DEFAULT_WHOIS_TIMEOUT)
    }
}

#[async_trait]
impl WhoisResolver for ToolboxWhoisResolver {
    async fn lookup(&self, domain: &str) -> CoreResult<WhoisSummary> {
        let info = ToolboxService::whois_lookup(domain, self.timeout).await?;
        Ok(WhoisSummary {
            expiration: info
                .expiration_display()
                .unwrap_or_else(|| NOT_FOUND.to_string()),
            registrar: info.registrar.unwrap_or_else(|| NOT_FOUND.to_string()),
        })
    }
}
