//! UltraDNS HTTP 请求方法

use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::{HttpUtils, is_success};
use crate::traits::{ErrorContext, ProviderErrorMapper};

use super::UltraDnsProvider;
use super::error::parse_error_body;

impl UltraDnsProvider {
    /// 执行 GET 请求
    ///
    /// 401 时刷新 token 并重放一次；再次 401 则按错误映射返回 `InvalidCredentials`。
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        context: ErrorContext,
    ) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        let mut replayed = false;

        loop {
            let token = self.access_token().await?;
            let request = self
                .client
                .get(&url)
                .header(AUTHORIZATION, format!("Bearer {token}"))
                .header(ACCEPT, "application/json")
                .query(query);

            let (status, body) = HttpUtils::execute_request_with_retry(
                request,
                self.provider_name(),
                "GET",
                path,
                self.max_retries,
            )
            .await?;

            if status == 401 && !replayed {
                log::info!(
                    "[{}] Access token rejected on {path}, refreshing and retrying",
                    self.provider_name()
                );
                self.refresh_tokens().await?;
                replayed = true;
                continue;
            }

            if !is_success(status) {
                let raw = parse_error_body(status, &body);
                let err = self.map_error(raw, context);
                if err.is_expected() {
                    log::warn!("GET {path} failed: {err}");
                } else {
                    log::error!("GET {path} failed: {err}");
                }
                return Err(err);
            }

            return HttpUtils::parse_json(&body, self.provider_name());
        }
    }
}
