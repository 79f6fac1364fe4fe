//! UltraDNS ZoneProvider trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::providers::common::{normalize_domain_name, to_fqdn};
use crate::traits::{ErrorContext, ProviderErrorMapper, ZoneProvider};
use crate::types::{CursorPage, MAX_ZONE_PAGE_SIZE, ProviderZone, SoaRecord, ZoneQueryParams};

use super::types::{RrSetListResponse, ZoneListResponse};
use super::{UltraDnsProvider, ZONES_PATH};

impl UltraDnsProvider {
    /// 构建 zone 列表查询参数
    fn zone_query(params: &ZoneQueryParams) -> Vec<(&'static str, String)> {
        let params = params.validated(MAX_ZONE_PAGE_SIZE);
        let mut query = vec![("limit", params.limit.to_string())];
        if let Some(cursor) = params.cursor {
            query.push(("cursor", cursor));
        }
        if let Some(zone_type) = params.zone_type {
            query.push(("q", format!("zone_type:{zone_type}")));
        }
        query
    }
}

#[async_trait]
impl ZoneProvider for UltraDnsProvider {
    fn id(&self) -> &'static str {
        "ultradns"
    }

    async fn authenticate(&self) -> Result<()> {
        self.sign_in().await
    }

    async fn list_zones(&self, params: &ZoneQueryParams) -> Result<CursorPage<ProviderZone>> {
        let response: ZoneListResponse = self
            .get(ZONES_PATH, &Self::zone_query(params), ErrorContext::default())
            .await?;

        let next_cursor = response.cursor_info.and_then(|c| c.next);
        let total_count = response.result_info.and_then(|r| r.total_count);
        let zones = response.zones.into_iter().map(ProviderZone::from).collect();

        Ok(CursorPage::new(zones, next_cursor, total_count))
    }

    async fn get_soa(&self, zone_name: &str) -> Result<SoaRecord> {
        let zone = normalize_domain_name(zone_name);
        let path = format!("{ZONES_PATH}/{}/rrsets/SOA/", urlencoding::encode(&zone));

        let response: RrSetListResponse = self
            .get(&path, &[], ErrorContext::record(&zone, "SOA"))
            .await?;

        let rr_set = response.rr_sets.into_iter().next();
        let Some((owner_name, ttl, rdata)) = rr_set.and_then(|set| {
            let rdata = set.rdata.into_iter().next()?;
            Some((set.owner_name, set.ttl, rdata))
        }) else {
            return Err(ProviderError::RecordNotFound {
                provider: self.provider_name().to_string(),
                zone,
                record_type: "SOA".to_string(),
                raw_message: Some("response carries no SOA rdata".to_string()),
            });
        };

        Ok(SoaRecord {
            owner_name: owner_name.unwrap_or_else(|| to_fqdn(&zone)),
            zone,
            ttl,
            rdata,
        })
    }
}
