//! UltraDNS Zone Provider

mod auth;
mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::providers::common::create_http_client;
use crate::types::{ProviderCredentials, ProviderOptions};

use auth::TokenSet;

/// zone 列表接口
pub(crate) const ZONES_PATH: &str = "/v3/zones";
/// token 接口（密码换取 / 刷新）
pub(crate) const TOKEN_PATH: &str = "/v2/authorization/token";

/// UltraDNS Zone Provider
///
/// Holds the credentials and the current token pair. The token is obtained
/// lazily on the first request, refreshed shortly before a known expiry and
/// whenever the API answers 401.
pub struct UltraDnsProvider {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) max_retries: u32,
    pub(crate) credentials: ProviderCredentials,
    pub(crate) tokens: RwLock<Option<TokenSet>>,
}

impl UltraDnsProvider {
    pub fn new(credentials: ProviderCredentials, options: ProviderOptions) -> Result<Self> {
        let client = create_http_client("ultradns", &options)?;
        Ok(Self {
            client,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            max_retries: options.max_retries,
            credentials,
            tokens: RwLock::new(None),
        })
    }
}
