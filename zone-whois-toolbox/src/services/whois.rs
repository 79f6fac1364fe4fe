//! WHOIS lookup module.
//!
//! Registries disagree on field labels and date formats, so every field is
//! tried against a list of known labels and the first match wins.

use std::sync::LazyLock;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use whois_rust::{WhoIs, WhoIsLookupOptions};

use crate::error::{ToolboxError, ToolboxResult};
use crate::types::WhoisResult;

/// Output format for normalised dates.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().filter_map(|p| Regex::new(p).ok()).collect()
}

static REGISTRAR: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?im)^\s*Registrar:[ \t]*(.+)$",
        r"(?im)^\s*Registrar Name:[ \t]*(.+)$",
        r"(?im)^\s*Sponsoring Registrar:[ \t]*(.+)$",
        r"(?im)^\s*registrar\.+:[ \t]*(.+)$",
    ])
});

static CREATED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?im)^\s*Creation Date:[ \t]*(.+)$",
        r"(?im)^\s*Created Date:[ \t]*(.+)$",
        r"(?im)^\s*Created:[ \t]*(.+)$",
        r"(?im)^\s*Registration Time:[ \t]*(.+)$",
        r"(?im)^\s*Registration Date:[ \t]*(.+)$",
    ])
});

static EXPIRES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?im)^\s*Registry Expiry Date:[ \t]*(.+)$",
        r"(?im)^\s*Registrar Registration Expiration Date:[ \t]*(.+)$",
        r"(?im)^\s*Expir(?:y|ation) Date:[ \t]*(.+)$",
        r"(?im)^\s*Expiration Time:[ \t]*(.+)$",
        r"(?im)^\s*Expires(?: On)?:[ \t]*(.+)$",
        r"(?im)^\s*paid-till:[ \t]*(.+)$",
    ])
});

static UPDATED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?im)^\s*Updated Date:[ \t]*(.+)$",
        r"(?im)^\s*Last Updated:[ \t]*(.+)$",
        r"(?im)^\s*Last Modified:[ \t]*(.+)$",
        r"(?im)^\s*Changed:[ \t]*(.+)$",
    ])
});

static NAME_SERVERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?im)^\s*Name Server:[ \t]*(\S+)",
        r"(?im)^\s*nserver:[ \t]*(\S+)",
    ])
});

static STATUS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?im)^\s*Domain Status:[ \t]*(\S+)",
        r"(?im)^\s*Status:[ \t]*(\S+)",
        r"(?im)^\s*state:[ \t]*(\S+)",
    ])
});

/// Perform a WHOIS lookup for a domain.
pub async fn whois_lookup(
    domain: &str,
    whois_servers: &str,
    timeout: Duration,
) -> ToolboxResult<WhoisResult> {
    let whois = WhoIs::from_string(whois_servers).map_err(|e| {
        ToolboxError::NetworkError(format!("Failed to initialize WHOIS client: {e}"))
    })?;

    let options = WhoIsLookupOptions::from_string(domain)
        .map_err(|e| ToolboxError::ValidationError(format!("Invalid domain: {e}")))?;

    log::debug!("WHOIS lookup for {domain}");
    let raw = tokio::time::timeout(timeout, whois.lookup_async(options))
        .await
        .map_err(|_| {
            ToolboxError::Timeout(format!(
                "WHOIS lookup for {domain} after {}s",
                timeout.as_secs_f32()
            ))
        })?
        .map_err(|e| ToolboxError::NetworkError(format!("WHOIS query failed: {e}")))?;

    Ok(parse_whois_response(domain, &raw))
}

/// Parse structured fields from a raw WHOIS response.
fn parse_whois_response(domain: &str, raw: &str) -> WhoisResult {
    WhoisResult {
        domain: domain.to_string(),
        registrar: first_match(raw, &REGISTRAR),
        creation_date: first_match(raw, &CREATED),
        expiration_date: first_match(raw, &EXPIRES),
        updated_date: first_match(raw, &UPDATED),
        name_servers: all_matches(raw, &NAME_SERVERS, |s| {
            s.trim_end_matches('.').to_lowercase()
        }),
        status: all_matches(raw, &STATUS, |s| s.trim_end_matches(',').to_string()),
        raw: raw.to_string(),
    }
}

/// Try the patterns in order and return the first non-empty capture.
fn first_match(text: &str, patterns: &[Regex]) -> Option<String> {
    patterns.iter().find_map(|re| {
        re.captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .find(|v| !v.is_empty())
            .map(str::to_string)
    })
}

/// Collect every capture of every pattern, deduplicated in order of appearance.
fn all_matches(text: &str, patterns: &[Regex], clean: impl Fn(&str) -> String) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for re in patterns {
        for caps in re.captures_iter(text) {
            let Some(m) = caps.get(1) else { continue };
            let value = clean(m.as_str().trim());
            if !value.is_empty() && !values.contains(&value) {
                values.push(value);
            }
        }
    }
    values
}

/// Parse a registry date and format it as [`DATE_FORMAT`] (UTC when an offset is given).
///
/// Returns `None` when the value matches none of the known layouts.
pub(crate) fn normalize_date(raw: &str) -> Option<String> {
    let value = strip_zone_suffix(raw.trim());
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc).format(DATE_FORMAT).to_string());
    }

    const WITH_OFFSET: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f%z",
        "%Y-%m-%dT%H:%M:%S%.f%:z",
        "%Y-%m-%d %H:%M:%S%.f%z",
        "%Y-%m-%d %H:%M:%S%.f %z",
        "%Y-%m-%d %H:%M:%S%.f%:z",
    ];
    for fmt in WITH_OFFSET {
        if let Ok(dt) = DateTime::parse_from_str(value, fmt) {
            return Some(dt.with_timezone(&Utc).format(DATE_FORMAT).to_string());
        }
    }

    const NAIVE_DATETIME: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y.%m.%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%d-%b-%Y %H:%M:%S",
        "%d.%m.%Y %H:%M:%S",
    ];
    for fmt in NAIVE_DATETIME {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.format(DATE_FORMAT).to_string());
        }
    }

    const DATE_ONLY: &[&str] = &[
        "%Y-%m-%d", "%d-%b-%Y", "%Y.%m.%d", "%Y/%m/%d", "%d.%m.%Y", "%d/%m/%Y", "%Y%m%d",
        "%b %d %Y",
    ];
    for fmt in DATE_ONLY {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|dt| dt.format(DATE_FORMAT).to_string());
        }
    }

    None
}

/// Drop trailing `UTC`/`GMT`/`(UTC)` style suffixes chrono cannot parse.
fn strip_zone_suffix(value: &str) -> &str {
    [" (UTC)", " UTC", " GMT", " Z"]
        .iter()
        .find_map(|suffix| value.strip_suffix(suffix))
        .map_or(value, str::trim_end)
}
