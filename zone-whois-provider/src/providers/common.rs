//! Provider 公共工具函数

use reqwest::Client;

use crate::error::{ProviderError, Result};
use crate::types::ProviderOptions;

// ============ HTTP Client ============

/// 按 `ProviderOptions` 创建带超时配置的 HTTP Client
pub fn create_http_client(provider: &str, options: &ProviderOptions) -> Result<Client> {
    Client::builder()
        .connect_timeout(options.connect_timeout)
        .timeout(options.request_timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ProviderError::NetworkError {
            provider: provider.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

// ============ 域名名称处理 ============

/// 去掉域名末尾的点
pub fn normalize_domain_name(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}

/// 补全末尾的点（API 路径中的 zone 名称使用 FQDN 形式）
pub fn to_fqdn(name: &str) -> String {
    format!("{}.", normalize_domain_name(name))
}
