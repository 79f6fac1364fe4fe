use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{CursorPage, ProviderZone, SoaRecord, ZoneQueryParams, ZoneType};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP 状态码
    pub status: u16,
    /// 错误码（API 返回的 errorCode）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 区域名（用于 `ZoneNotFound` / `RecordNotFound`）
    pub zone: Option<String>,
    /// 记录类型（用于 `RecordNotFound`）
    pub record_type: Option<String>,
}

impl ErrorContext {
    pub fn record(zone: &str, record_type: &str) -> Self {
        Self {
            zone: Some(zone.to_string()),
            record_type: Some(record_type.to_string()),
        }
    }
}

/// Provider 错误映射 Trait（内部使用）
/// 将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Zone 数据源 Trait
#[async_trait]
pub trait ZoneProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 获取访问令牌（密码模式换取 token；token 模式直接采用）
    async fn authenticate(&self) -> Result<()>;

    /// 获取一页 zone 列表（游标分页）
    async fn list_zones(&self, params: &ZoneQueryParams) -> Result<CursorPage<ProviderZone>>;

    /// 获取 zone 的 SOA 记录
    async fn get_soa(&self, zone_name: &str) -> Result<SoaRecord>;

    /// 沿游标取完全部 zone
    ///
    /// 反复调用 `list_zones()`，直到 `next` 游标为空。
    /// 游标重复出现时报错，避免无限循环。
    async fn list_all_zones(
        &self,
        zone_type: Option<ZoneType>,
        page_size: u32,
    ) -> Result<Vec<ProviderZone>> {
        let mut params = ZoneQueryParams {
            limit: page_size,
            cursor: None,
            zone_type,
        };
        let mut seen_cursors = HashSet::new();
        let mut zones = Vec::new();

        loop {
            let page = self.list_zones(&params).await?;
            zones.extend(page.items);

            let Some(next) = page.next_cursor else {
                break;
            };
            if !seen_cursors.insert(next.clone()) {
                return Err(ProviderError::ParseError {
                    provider: self.id().to_string(),
                    detail: format!("pagination cursor repeated: {next}"),
                });
            }
            log::debug!("[{}] following cursor {next}", self.id());
            params = params.with_cursor(next);
        }

        Ok(zones)
    }
}
