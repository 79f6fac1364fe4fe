//! 报表组装服务
//!
//! 认证 → 列出全部 zone → 列出 alias zone → 逐个 zone 查询 SOA 与 WHOIS。
//! 单个 zone 失败只记录并跳过，认证或列表失败则整体失败。

use std::collections::HashMap;
use std::sync::Arc;

use zone_whois_provider::MAX_ZONE_PAGE_SIZE;

use crate::error::CoreResult;
use crate::services::contact::contact_email;
use crate::traits::{ReportProgress, WhoisResolver, ZoneProvider};
use crate::types::{
    ProviderZone, ReportOptions, ReportOutcome, WhoisSummary, ZoneFailure, ZoneReport, ZoneType,
};

/// Original zone name → alias zone names, in listing order.
pub type AliasMap = HashMap<String, Vec<String>>;

/// Builds the zone report.
pub struct ReportService {
    provider: Arc<dyn ZoneProvider>,
    whois: Arc<dyn WhoisResolver>,
    options: ReportOptions,
}

impl ReportService {
    /// 创建报表服务实例
    #[must_use]
    pub fn new(
        provider: Arc<dyn ZoneProvider>,
        whois: Arc<dyn WhoisResolver>,
        options: ReportOptions,
    ) -> Self {
        Self {
            provider,
            whois,
            options,
        }
    }

    /// Run the whole report.
    pub async fn build_report(&self, progress: &dyn ReportProgress) -> CoreResult<ReportOutcome> {
        let page_size = self.options.page_size.clamp(1, MAX_ZONE_PAGE_SIZE);

        self.provider.authenticate().await?;

        let zones = self.provider.list_all_zones(None, page_size).await?;
        log::info!("Found {} zones", zones.len());

        let aliases = self
            .provider
            .list_all_zones(Some(ZoneType::Alias), page_size)
            .await?;
        let alias_map = build_alias_map(&aliases);
        log::info!(
            "Found {} alias zones for {} zones",
            aliases.len(),
            alias_map.len()
        );

        progress.start(zones.len());
        let mut outcome = ReportOutcome::default();

        for zone in &zones {
            let name = zone.normalized_name();
            match self.zone_report(zone, &alias_map).await {
                Ok(row) => outcome.rows.push(row),
                Err(e) => {
                    if e.is_expected() {
                        log::warn!("Error processing zone {name}: {e}");
                    } else {
                        log::error!("Error processing zone {name}: {e}");
                    }
                    outcome.failures.push(ZoneFailure {
                        zone: name.to_string(),
                        message: e.to_string(),
                    });
                }
            }
            progress.zone_done(name);
        }

        progress.finish();
        log::info!(
            "Report complete: {} rows, {} zones skipped",
            outcome.rows.len(),
            outcome.failures.len()
        );
        Ok(outcome)
    }

    /// SOA contact, alias and WHOIS for one zone.
    async fn zone_report(&self, zone: &ProviderZone, alias_map: &AliasMap) -> CoreResult<ZoneReport> {
        let domain_name = zone.normalized_name().to_string();

        let soa = self.provider.get_soa(&domain_name).await?;
        let contact_email = contact_email(&soa, self.options.mailbox_contacts)?;
        let whois = self.whois_summary(&domain_name).await;

        Ok(ZoneReport {
            aliased_domains: alias_map
                .get(&alias_key(&domain_name))
                .map(|names| names.join(", ")),
            last_modified: zone.last_modified.clone(),
            contact_email,
            registrar: whois.registrar,
            domain_expiration: whois.expiration,
            zone_type: zone.zone_type.to_string(),
            resource_record_count: zone.resource_record_count,
            domain_name,
        })
    }

    async fn whois_summary(&self, domain: &str) -> WhoisSummary {
        if self.options.skip_whois {
            return WhoisSummary::not_found();
        }
        match self.whois.lookup(domain).await {
            Ok(summary) => summary,
            Err(e) => {
                log::warn!("WHOIS lookup failed for {domain}: {e}");
                WhoisSummary::not_found()
            }
        }
    }
}

/// Group alias zones by the zone they alias.
pub fn build_alias_map(aliases: &[ProviderZone]) -> AliasMap {
    let mut map = AliasMap::new();
    for alias in aliases {
        let Some(original) = alias.original_zone_name.as_deref() else {
            log::debug!("Alias zone {} has no original zone name", alias.name);
            continue;
        };
        let names = map.entry(alias_key(original)).or_default();
        let name = alias.normalized_name().to_string();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    map
}

fn alias_key(zone: &str) -> String {
    zone.trim_end_matches('.').to_ascii_lowercase()
}
