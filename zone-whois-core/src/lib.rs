//! Zone WHOIS Core Library
//!
//! Assembles the zone report:
//! - zone and alias listing through a [`ZoneProvider`]
//! - contact e-mail from each zone's SOA record
//! - registrar and expiration through a [`WhoisResolver`]
//! - JSON / CSV output ([`services::report_writer`])
//!
//! Data sources are abstracted behind traits so the service can run against
//! the UltraDNS client or in-memory mocks.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{ReportService, ToolboxWhoisResolver};
pub use traits::{NoProgress, ReportProgress, WhoisResolver, ZoneProvider};
pub use types::{OutputFormat, ReportOptions, ReportOutcome, ZoneFailure, ZoneReport};
