//! UltraDNS API 类型定义

use serde::Deserialize;

use crate::types::{ProviderZone, ZoneType};

/// `GET /v3/zones` 响应
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneListResponse {
    #[serde(default)]
    pub zones: Vec<UltraZone>,
    pub cursor_info: Option<CursorInfo>,
    pub result_info: Option<ResultInfo>,
}

/// 游标信息
#[derive(Debug, Deserialize)]
pub struct CursorInfo {
    pub next: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultInfo {
    pub total_count: Option<u32>,
}

/// Zone 结构
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UltraZone {
    pub properties: UltraZoneProperties,
    /// 仅 ALIAS zone 返回
    pub original_zone_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UltraZoneProperties {
    pub name: String,
    #[serde(rename = "type")]
    pub zone_type: String,
    pub status: Option<String>,
    pub account_name: Option<String>,
    #[serde(default)]
    pub resource_record_count: u64,
    pub last_modified_date_time: Option<String>,
}

impl From<UltraZone> for ProviderZone {
    fn from(zone: UltraZone) -> Self {
        let props = zone.properties;
        Self {
            name: props.name,
            zone_type: ZoneType::from(props.zone_type),
            status: props.status,
            account_name: props.account_name,
            resource_record_count: props.resource_record_count,
            last_modified: props.last_modified_date_time,
            original_zone_name: zone.original_zone_name,
        }
    }
}

/// `GET /v3/zones/{zone}/rrsets/{type}/` 响应
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RrSetListResponse {
    #[serde(default)]
    pub rr_sets: Vec<UltraRrSet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UltraRrSet {
    pub owner_name: Option<String>,
    pub ttl: Option<u32>,
    #[serde(default)]
    pub rdata: Vec<String>,
}

/// `POST /v2/authorization/token` 响应
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<ExpiresIn>,
}

/// `expiresIn` 有时是字符串，有时是数字
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ExpiresIn {
    Seconds(i64),
    Text(String),
}

impl ExpiresIn {
    pub fn as_secs(&self) -> Option<i64> {
        match self {
            Self::Seconds(secs) => Some(*secs),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// 错误响应体中的单个错误
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UltraApiError {
    pub error_code: Option<i64>,
    pub error_message: Option<String>,
    /// OAuth 风格错误（认证接口）
    pub error: Option<String>,
    #[serde(alias = "error_description")]
    pub error_description: Option<String>,
}

/// 错误响应体：单个对象或数组
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UltraErrorBody {
    List(Vec<UltraApiError>),
    Single(UltraApiError),
}

impl UltraErrorBody {
    /// 取第一个错误
    pub fn into_first(self) -> Option<UltraApiError> {
        match self {
            Self::List(errors) => errors.into_iter().next(),
            Self::Single(error) => Some(error),
        }
    }
}
