//! 报表运行选项

use std::fmt;
use std::str::FromStr;

use zone_whois_provider::MAX_ZONE_PAGE_SIZE;

/// Settings for one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Zones requested per page, clamped to `1..=1000`.
    pub page_size: u32,
    /// Skip WHOIS; registrar and expiration become `Not found`.
    pub skip_whois: bool,
    /// Render SOA contacts as `local@domain` instead of the dotted RNAME.
    pub mailbox_contacts: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            page_size: MAX_ZONE_PAGE_SIZE,
            skip_whois: false,
            mailbox_contacts: false,
        }
    }
}

/// Serialization format of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Csv => f.write_str("csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("Unsupported output format: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = ReportOptions::default();
        assert_eq!(opts.page_size, 1000);
        assert!(!opts.skip_whois);
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }

    #[test]
    fn format_parse() {
        assert_eq!("CSV".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
