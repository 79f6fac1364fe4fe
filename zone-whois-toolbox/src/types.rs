//! Public types returned by toolbox operations.

use serde::{Deserialize, Serialize};

use crate::services::whois::normalize_date;

/// WHOIS query result with parsed registration fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WhoisResult {
    /// The queried domain name (ASCII form).
    pub domain: String,
    /// Domain registrar (e.g. "MarkMonitor Inc.").
    pub registrar: Option<String>,
    /// Registration creation date, verbatim.
    pub creation_date: Option<String>,
    /// Registration expiration date, verbatim. The first expiration line wins.
    pub expiration_date: Option<String>,
    /// Last updated date, verbatim.
    pub updated_date: Option<String>,
    /// Authoritative name servers.
    pub name_servers: Vec<String>,
    /// EPP status codes.
    pub status: Vec<String>,
    /// Raw WHOIS response text.
    pub raw: String,
}

impl WhoisResult {
    /// Expiration formatted as `%Y-%m-%d %H:%M:%S`.
    ///
    /// Values in a format we do not recognise are returned unchanged.
    pub fn expiration_display(&self) -> Option<String> {
        let raw = self.expiration_date.as_deref()?;
        Some(normalize_date(raw).unwrap_or_else(|| raw.to_string()))
    }
}
