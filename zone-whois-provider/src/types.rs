use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// ============ Pagination ============

/// Largest page the zone listing endpoint accepts.
pub const MAX_ZONE_PAGE_SIZE: u32 = 1000;

/// Query parameters for one page of the zone listing.
///
/// Listing is cursor based: the first request carries no cursor, every
/// following request passes the `next` cursor returned by the previous page.
///
/// # Default
///
/// The default is `limit = 1000`, no cursor, no zone type filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ZoneQueryParams {
    /// Number of zones per page.
    pub limit: u32,
    /// Cursor returned by the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Restrict the listing to one zone type (`q=zone_type:<TYPE>`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_type: Option<ZoneType>,
}

impl Default for ZoneQueryParams {
    fn default() -> Self {
        Self {
            limit: MAX_ZONE_PAGE_SIZE,
            cursor: None,
            zone_type: None,
        }
    }
}

impl ZoneQueryParams {
    /// First page of zones of the given type.
    pub fn of_type(zone_type: ZoneType, limit: u32) -> Self {
        Self {
            limit,
            cursor: None,
            zone_type: Some(zone_type),
        }
    }

    /// Clamp `limit` to `1..=max_page_size`, keeping cursor and filter.
    #[must_use]
    pub fn validated(&self, max_page_size: u32) -> Self {
        Self {
            limit: self.limit.clamp(1, max_page_size),
            cursor: self.cursor.clone(),
            zone_type: self.zone_type.clone(),
        }
    }

    /// Same query positioned at `cursor`.
    #[must_use]
    pub fn with_cursor(&self, cursor: String) -> Self {
        Self {
            limit: self.limit,
            cursor: Some(cursor),
            zone_type: self.zone_type.clone(),
        }
    }
}

/// One page of a cursor-paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorPage<T> {
    /// Items in this page.
    pub items: Vec<T>,
    /// Cursor of the next page; `None` on the last page.
    pub next_cursor: Option<String>,
    /// Total number of matching items, when reported by the API.
    pub total_count: Option<u32>,
}

impl<T> CursorPage<T> {
    /// Build a page, treating an empty cursor string as "no more pages".
    pub fn new(items: Vec<T>, next_cursor: Option<String>, total_count: Option<u32>) -> Self {
        Self {
            items,
            next_cursor: next_cursor.filter(|c| !c.is_empty()),
            total_count,
        }
    }

    /// Whether another page follows this one.
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }
}

// ============ Credentials ============

/// Credentials used to obtain API access.
///
/// Either a username/password pair, exchanged for a token on first use, or
/// an existing bearer token with an optional refresh token.
#[derive(Clone, PartialEq, Eq)]
pub enum ProviderCredentials {
    /// Password grant.
    Password {
        /// Account user name.
        username: String,
        /// Account password.
        password: String,
    },
    /// Pre-issued bearer token.
    Token {
        /// Bearer token sent on every request.
        access_token: String,
        /// Token used to obtain a new bearer once the current one expires.
        refresh_token: Option<String>,
    },
}

impl ProviderCredentials {
    /// Whether a password is available to fall back on when refresh fails.
    pub fn can_reauthenticate(&self) -> bool {
        matches!(self, Self::Password { .. })
    }
}

impl fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Password { username, .. } => f
                .debug_struct("Password")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Self::Token { refresh_token, .. } => f
                .debug_struct("Token")
                .field("access_token", &"<redacted>")
                .field(
                    "refresh_token",
                    &refresh_token.as_ref().map(|_| "<redacted>"),
                )
                .finish(),
        }
    }
}

// ============ Provider Options ============

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.ultradns.com";

/// Connection and retry settings for a provider instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderOptions {
    /// API base URL without trailing slash.
    pub base_url: String,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Whole-request timeout.
    pub request_timeout: Duration,
    /// Additional attempts for transient failures.
    pub max_retries: u32,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_retries: 3,
        }
    }
}

impl ProviderOptions {
    /// Options pointing at another base URL (test servers, staging API).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

// ============ Zone Types ============

/// Kind of zone as reported by the API.
///
/// Unrecognised values are preserved in [`ZoneType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ZoneType {
    /// Zone served from records held by the provider.
    Primary,
    /// Zone transferred from an external primary.
    Secondary,
    /// Zone mirroring the records of another zone.
    Alias,
    /// Any other type string.
    Other(String),
}

impl ZoneType {
    /// Upper-case API spelling.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Primary => "PRIMARY",
            Self::Secondary => "SECONDARY",
            Self::Alias => "ALIAS",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for ZoneType {
    fn from(value: String) -> Self {
        match value.to_uppercase().as_str() {
            "PRIMARY" => Self::Primary,
            "SECONDARY" => Self::Secondary,
            "ALIAS" => Self::Alias,
            _ => Self::Other(value),
        }
    }
}

impl From<ZoneType> for String {
    fn from(value: ZoneType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A zone managed by the provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderZone {
    /// Fully qualified zone name as returned by the API (usually with a trailing dot).
    pub name: String,
    /// Zone type.
    pub zone_type: ZoneType,
    /// Zone status (`ACTIVE`, `SUSPENDED`, ...), when reported.
    pub status: Option<String>,
    /// Owning account.
    pub account_name: Option<String>,
    /// Number of resource records in the zone.
    pub resource_record_count: u64,
    /// Last modification timestamp, verbatim from the API.
    pub last_modified: Option<String>,
    /// For alias zones: the zone being aliased.
    pub original_zone_name: Option<String>,
}

impl ProviderZone {
    /// Zone name without the trailing root dot.
    pub fn normalized_name(&self) -> &str {
        self.name.trim_end_matches('.')
    }
}

// ============ Record Types ============

/// The SOA record set of a zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SoaRecord {
    /// Zone that was queried.
    pub zone: String,
    /// Owner name of the record set.
    pub owner_name: String,
    /// TTL in seconds, when reported.
    pub ttl: Option<u32>,
    /// SOA rdata in presentation format: `MNAME RNAME SERIAL REFRESH RETRY EXPIRE MINIMUM`.
    pub rdata: String,
}

impl SoaRecord {
    /// Primary name server (first rdata field).
    pub fn mname(&self) -> Option<&str> {
        self.rdata.split_whitespace().next()
    }

    /// Responsible mailbox in DNS form (second rdata field).
    pub fn rname(&self) -> Option<&str> {
        self.rdata.split_whitespace().nth(1)
    }

    /// Zone serial (third rdata field).
    pub fn serial(&self) -> Option<u32> {
        self.rdata.split_whitespace().nth(2)?.parse().ok()
    }
}
