//! Abstraction trait definitions

mod progress;
mod whois_resolver;

pub use progress::{NoProgress, ReportProgress};
pub use whois_resolver::WhoisResolver;

// Re-export provider trait
pub use zone_whois_provider::ZoneProvider;
