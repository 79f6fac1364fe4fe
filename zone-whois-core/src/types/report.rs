//! 报表行与运行结果

use serde::{Deserialize, Serialize};

/// Placeholder for WHOIS fields that could not be determined.
pub const NOT_FOUND: &str = "Not found";

/// One row of the zone report.
///
/// Field order is the JSON key order and the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneReport {
    #[serde(rename = "Domain Name")]
    pub domain_name: String,
    #[serde(rename = "Last Modified")]
    pub last_modified: Option<String>,
    #[serde(rename = "Zone Contact E-Mail")]
    pub contact_email: String,
    #[serde(rename = "Registrar")]
    pub registrar: String,
    #[serde(rename = "Domain Expiration")]
    pub domain_expiration: String,
    #[serde(rename = "Aliased Domains")]
    pub aliased_domains: Option<String>,
    #[serde(rename = "Zone Type")]
    pub zone_type: String,
    #[serde(rename = "Resource Record Count")]
    pub resource_record_count: u64,
}

impl ZoneReport {
    /// Column names, in output order.
    pub const COLUMNS: [&'static str; 8] = [
        "Domain Name",
        "Last Modified",
        "Zone Contact E-Mail",
        "Registrar",
        "Domain Expiration",
        "Aliased Domains",
        "Zone Type",
        "Resource Record Count",
    ];

    /// Row as CSV cells, `None` values rendered empty.
    pub fn to_record(&self) -> [String; 8] {
        [
            self.domain_name.clone(),
            self.last_modified.clone().unwrap_or_default(),
            self.contact_email.clone(),
            self.registrar.clone(),
            self.domain_expiration.clone(),
            self.aliased_domains.clone().unwrap_or_default(),
            self.zone_type.clone(),
            self.resource_record_count.to_string(),
        ]
    }
}

/// Registrar and expiration of a domain, ready for the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhoisSummary {
    pub registrar: String,
    pub expiration: String,
}

impl WhoisSummary {
    /// Both fields `Not found`.
    pub fn not_found() -> Self {
        Self {
            registrar: NOT_FOUND.to_string(),
            expiration: NOT_FOUND.to_string(),
        }
    }
}

/// A zone left out of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneFailure {
    pub zone: String,
    pub message: String,
}

/// Result of one report run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportOutcome {
    /// Rows in zone listing order.
    pub rows: Vec<ZoneReport>,
    /// Zones whose enrichment failed.
    pub failures: Vec<ZoneFailure>,
}
