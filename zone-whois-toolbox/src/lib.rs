//! WHOIS toolbox for zone reports
//!
//! 查询域名 WHOIS 并解析注册商、注册/到期/更新时间、DNS 服务器和状态。
//! 所有功能无状态，独立于 DNS 服务商 API。

mod error;
mod services;
mod types;

pub use error::{ToolboxError, ToolboxResult};
pub use services::{DEFAULT_WHOIS_TIMEOUT, ToolboxService};
pub use types::WhoisResult;
