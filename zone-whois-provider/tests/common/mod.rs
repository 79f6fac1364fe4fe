//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use wiremock::MockServer;
use zone_whois_provider::{ProviderCredentials, ProviderOptions, ZoneProvider, create_provider};

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 指向 mock server 的选项，重试间隔保持很短
pub fn options_for(server: &MockServer, max_retries: u32) -> ProviderOptions {
    ProviderOptions {
        connect_timeout: Duration::from_secs(2),
        request_timeout: Duration::from_secs(5),
        max_retries,
        ..ProviderOptions::default()
    }
    .with_base_url(server.uri())
}

pub fn password_credentials() -> ProviderCredentials {
    ProviderCredentials::Password {
        username: "alice".to_string(),
        password: "s3cret".to_string(),
    }
}

pub fn token_credentials(access: &str, refresh: Option<&str>) -> ProviderCredentials {
    ProviderCredentials::Token {
        access_token: access.to_string(),
        refresh_token: refresh.map(str::to_string),
    }
}

pub fn provider(
    server: &MockServer,
    credentials: ProviderCredentials,
    max_retries: u32,
) -> Arc<dyn ZoneProvider> {
    match create_provider(credentials, options_for(server, max_retries)) {
        Ok(provider) => provider,
        Err(e) => panic!("failed to build provider: {e}"),
    }
}

/// token 接口响应体
pub fn token_body(access: &str, refresh: &str) -> Value {
    json!({
        "tokenType": "Bearer",
        "accessToken": access,
        "refreshToken": refresh,
        "expiresIn": "3600",
    })
}

/// 单个 zone 的 JSON
pub fn zone_json(name: &str, zone_type: &str, records: u64) -> Value {
    json!({
        "properties": {
            "name": name,
            "accountName": "acme",
            "type": zone_type,
            "dnssecStatus": "UNSIGNED",
            "status": "ACTIVE",
            "resourceRecordCount": records,
            "lastModifiedDateTime": "2024-03-01T10:15:00Z",
        }
    })
}

/// 单个 alias zone 的 JSON
pub fn alias_json(name: &str, original: &str) -> Value {
    json!({
        "properties": {
            "name": name,
            "accountName": "acme",
            "type": "ALIAS",
            "status": "ACTIVE",
            "resourceRecordCount": 0,
        },
        "originalZoneName": original,
    })
}

/// zone 列表页
pub fn zone_page(zones: Vec<Value>, next: Option<&str>, total: u32) -> Value {
    let mut cursor_info = json!({});
    if let Some(next) = next {
        cursor_info["next"] = json!(next);
    }
    json!({
        "queryInfo": { "limit": 1000 },
        "cursorInfo": cursor_info,
        "resultInfo": { "totalCount": total, "offset": 0, "returnedCount": zones.len() },
        "zones": zones,
    })
}
