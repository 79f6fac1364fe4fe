//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use zone_whois_provider::{CursorPage, ProviderError, ZoneQueryParams};

use crate::error::{CoreResult, ToolboxError};
use crate::services::ReportService;
use crate::traits::{ReportProgress, WhoisResolver, ZoneProvider};
use crate::types::{ProviderZone, ReportOptions, SoaRecord, WhoisSummary, ZoneType};

// ===== MockZoneProvider =====

/// 单页返回全部 zone 的 provider
pub struct MockZoneProvider {
    zones: Vec<ProviderZone>,
    aliases: Vec<ProviderZone>,
    soa: HashMap<String, SoaRecord>,
    auth_error: Option<ProviderError>,
    list_error: Option<ProviderError>,
    page_sizes: Mutex<Vec<u32>>,
}

impl MockZoneProvider {
    pub fn new() -> Self {
        Self {
            zones: Vec::new(),
            aliases: Vec::new(),
            soa: HashMap::new(),
            auth_error: None,
            list_error: None,
            page_sizes: Mutex::new(Vec::new()),
        }
    }

    pub fn with_zones(mut self, zones: Vec<ProviderZone>) -> Self {
        self.zones = zones;
        self
    }

    pub fn with_aliases(mut self, aliases: Vec<ProviderZone>) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn with_soa(mut self, soa: SoaRecord) -> Self {
        self.soa.insert(soa.zone.clone(), soa);
        self
    }

    pub fn with_auth_error(mut self, err: ProviderError) -> Self {
        self.auth_error = Some(err);
        self
    }

    pub fn with_list_error(mut self, err: ProviderError) -> Self {
        self.list_error = Some(err);
        self
    }

    /// 每次 `list_zones` 请求的 limit
    pub fn page_sizes(&self) -> Vec<u32> {
        self.page_sizes.lock().unwrap().clone()
    }
}

#[async_trait]
impl ZoneProvider for MockZoneProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn authenticate(&self) -> zone_whois_provider::Result<()> {
        match &self.auth_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn list_zones(
        &self,
        params: &ZoneQueryParams,
    ) -> zone_whois_provider::Result<CursorPage<ProviderZone>> {
        self.page_sizes.lock().unwrap().push(params.limit);
        if let Some(err) = &self.list_error {
            return Err(err.clone());
        }
        let items = match params.zone_type {
            Some(ZoneType::Alias) => self.aliases.clone(),
            _ => self.zones.clone(),
        };
        Ok(CursorPage::new(items, None, None))
    }

    async fn get_soa(&self, zone_name: &str) -> zone_whois_provider::Result<SoaRecord> {
        self.soa
            .get(zone_name)
            .cloned()
            .ok_or_else(|| ProviderError::RecordNotFound {
                provider: "mock".to_string(),
                zone: zone_name.to_string(),
                record_type: "SOA".to_string(),
                raw_message: None,
            })
    }
}

// ===== MockWhoisResolver =====

pub struct MockWhoisResolver {
    results: HashMap<String, WhoisSummary>,
    failing: Vec<String>,
    queried: Mutex<Vec<String>>,
}

impl MockWhoisResolver {
    pub fn new() -> Self {
        Self {
            results: HashMap::new(),
            failing: Vec::new(),
            queried: Mutex::new(Vec::new()),
        }
    }

    pub fn with_result(mut self, domain: &str, registrar: &str, expiration: &str) -> Self {
        self.results.insert(
            domain.to_string(),
            WhoisSummary {
                registrar: registrar.to_string(),
                expiration: expiration.to_string(),
            },
        );
        self
    }

    pub fn with_error(mut self, domain: &str) -> Self {
        self.failing.push(domain.to_string());
        self
    }

    /// 已查询的域名
    pub fn queried(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

#[async_trait]
impl WhoisResolver for MockWhoisResolver {
    async fn lookup(&self, domain: &str) -> CoreResult<WhoisSummary> {
        self.queried.lock().unwrap().push(domain.to_string());
        if self.failing.iter().any(|d| d == domain) {
            return Err(ToolboxError::Timeout(format!("WHOIS lookup for {domain}")).into());
        }
        Ok(self
            .results
            .get(domain)
            .cloned()
            .unwrap_or_else(WhoisSummary::not_found))
    }
}

// ===== RecordingProgress =====

#[derive(Default)]
pub struct RecordingProgress {
    started: Mutex<Option<usize>>,
    done: Mutex<Vec<String>>,
    finished: Mutex<bool>,
}

impl RecordingProgress {
    pub fn started(&self) -> Option<usize> {
        *self.started.lock().unwrap()
    }

    pub fn done(&self) -> Vec<String> {
        self.done.lock().unwrap().clone()
    }

    pub fn finished(&self) -> bool {
        *self.finished.lock().unwrap()
    }
}

impl ReportProgress for RecordingProgress {
    fn start(&self, total: usize) {
        *self.started.lock().unwrap() = Some(total);
    }

    fn zone_done(&self, zone: &str) {
        self.done.lock().unwrap().push(zone.to_string());
    }

    fn finish(&self) {
        *self.finished.lock().unwrap() = true;
    }
}

// ===== 工厂方法 =====

/// 创建测试用 `ReportService`，同时返回 mock 以便断言
pub fn create_test_service(
    provider: MockZoneProvider,
    whois: MockWhoisResolver,
    options: ReportOptions,
) -> (
    ReportService,
    Arc<MockZoneProvider>,
    Arc<MockWhoisResolver>,
) {
    let provider = Arc::new(provider);
    let whois = Arc::new(whois);
    let service = ReportService::new(provider.clone(), whois.clone(), options);
    (service, provider, whois)
}

/// PRIMARY zone
pub fn primary_zone(name: &str, records: u64) -> ProviderZone {
    ProviderZone {
        name: name.to_string(),
        zone_type: ZoneType::Primary,
        status: Some("ACTIVE".to_string()),
        account_name: Some("acme".to_string()),
        resource_record_count: records,
        last_modified: Some("2024-03-01T10:15:00Z".to_string()),
        original_zone_name: None,
    }
}

/// ALIAS zone pointing at `original`
pub fn alias_zone(name: &str, original: &str) -> ProviderZone {
    ProviderZone {
        name: name.to_string(),
        zone_type: ZoneType::Alias,
        status: Some("ACTIVE".to_string()),
        account_name: Some("acme".to_string()),
        resource_record_count: 0,
        last_modified: None,
        original_zone_name: Some(original.to_string()),
    }
}

/// SOA record of `zone` with the given RNAME
pub fn soa_for(zone: &str, rname: &str) -> SoaRecord {
    SoaRecord {
        zone: zone.to_string(),
        owner_name: format!("{zone}."),
        ttl: Some(86400),
        rdata: format!("pdns1.ultradns.net. {rname} 2024030101 86400 86400 86400 86400"),
    }
}
