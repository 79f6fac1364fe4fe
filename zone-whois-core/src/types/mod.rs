//! 类型定义模块

mod options;
mod report;

pub use options::{OutputFormat, ReportOptions};
pub use report::{NOT_FOUND, ReportOutcome, WhoisSummary, ZoneFailure, ZoneReport};

// Re-export provider 库的公共类型
pub use zone_whois_provider::{ProviderZone, SoaRecord, ZoneType};
