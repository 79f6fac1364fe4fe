//! 业务逻辑服务层

mod contact;
mod report_service;
pub mod report_writer;
mod whois;

pub use contact::{contact_email, rname_to_email, unescape_rname};
pub use report_service::{AliasMap, ReportService, build_alias_map};
pub use whois::ToolboxWhoisResolver;
