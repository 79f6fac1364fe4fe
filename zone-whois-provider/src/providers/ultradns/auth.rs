//! UltraDNS token 管理
//!
//! - 密码模式：`grant_type=password` 换取 access/refresh token
//! - token 模式：直接采用传入的 token，过期时间未知
//! - 刷新：优先 `grant_type=refresh_token`，失败且有密码时回退到密码模式

use chrono::{DateTime, Duration, Utc};
use reqwest::header::ACCEPT;

use crate::error::{ProviderError, Result};
use crate::http_client::{HttpUtils, is_success};
use crate::traits::{ErrorContext, ProviderErrorMapper};
use crate::types::ProviderCredentials;

use super::error::parse_error_body;
use super::types::TokenResponse;
use super::{TOKEN_PATH, UltraDnsProvider};

/// 距离过期不足该秒数时主动刷新
const EXPIRY_THRESHOLD_SECS: i64 = 60;

/// 当前持有的 token
#[derive(Clone)]
pub(crate) struct TokenSet {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl TokenSet {
    fn from_response(resp: TokenResponse, now: DateTime<Utc>) -> Self {
        let expires_at = resp
            .expires_in
            .and_then(|e| e.as_secs())
            .filter(|secs| *secs > 0)
            .map(|secs| now + Duration::seconds(secs));
        Self {
            access_token: resp.access_token,
            refresh_token: resp.refresh_token.filter(|t| !t.is_empty()),
            expires_at,
        }
    }

    /// 过期时间已知且落在 `threshold_secs` 以内
    pub fn is_expired(&self, threshold_secs: i64, now: DateTime<Utc>) -> bool {
        self.expires_at
            .is_some_and(|at| now + Duration::seconds(threshold_secs) >= at)
    }
}

impl UltraDnsProvider {
    /// 返回可用的 access token，必要时先认证或刷新
    pub(crate) async fn access_token(&self) -> Result<String> {
        let current = self.tokens.read().await.clone();
        match current {
            Some(tokens) if !tokens.is_expired(EXPIRY_THRESHOLD_SECS, Utc::now()) => {
                return Ok(tokens.access_token);
            }
            Some(_) => {
                log::info!("[{}] Access token about to expire, refreshing", self.provider_name());
                self.refresh_tokens().await?;
            }
            None => self.sign_in().await?,
        }

        self.tokens
            .read()
            .await
            .as_ref()
            .map(|t| t.access_token.clone())
            .ok_or_else(|| ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some("no access token available".to_string()),
            })
    }

    /// 按凭证类型获取初始 token 并保存
    pub(crate) async fn sign_in(&self) -> Result<()> {
        let tokens = self.initial_tokens().await?;
        *self.tokens.write().await = Some(tokens);
        Ok(())
    }

    /// 刷新 token
    ///
    /// 无 refresh token 或刷新失败时，密码凭证重新走密码模式；
    /// token 凭证无法恢复，返回 `InvalidCredentials`。
    pub(crate) async fn refresh_tokens(&self) -> Result<()> {
        let previous_refresh = self
            .tokens
            .read()
            .await
            .as_ref()
            .and_then(|t| t.refresh_token.clone());

        let mut refreshed = match previous_refresh.as_deref() {
            Some(refresh_token) => match self.refresh_grant(refresh_token).await {
                Ok(tokens) => tokens,
                Err(e) if self.credentials.can_reauthenticate() => {
                    log::warn!(
                        "[{}] Token refresh failed, signing in again: {e}",
                        self.provider_name()
                    );
                    self.initial_tokens().await?
                }
                Err(e) => return Err(e),
            },
            None if self.credentials.can_reauthenticate() => self.initial_tokens().await?,
            None => {
                return Err(ProviderError::InvalidCredentials {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(
                        "access token rejected and no refresh token available".to_string(),
                    ),
                });
            }
        };

        // 刷新响应可能不带新的 refresh token，沿用旧的
        if refreshed.refresh_token.is_none() {
            refreshed.refresh_token = previous_refresh;
        }
        log::info!("[{}] Access token refreshed", self.provider_name());
        *self.tokens.write().await = Some(refreshed);
        Ok(())
    }

    async fn initial_tokens(&self) -> Result<TokenSet> {
        match &self.credentials {
            ProviderCredentials::Password { username, password } => {
                log::info!("[{}] Authenticating as {username}", self.provider_name());
                self.request_token(&[
                    ("grant_type", "password"),
                    ("username", username.as_str()),
                    ("password", password.as_str()),
                ])
                .await
            }
            ProviderCredentials::Token {
                access_token,
                refresh_token,
            } => Ok(TokenSet {
                access_token: access_token.clone(),
                refresh_token: refresh_token.clone(),
                expires_at: None,
            }),
        }
    }

    async fn refresh_grant(&self, refresh_token: &str) -> Result<TokenSet> {
        self.request_token(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .await
    }

    async fn request_token(&self, form: &[(&str, &str)]) -> Result<TokenSet> {
        let url = format!("{}{TOKEN_PATH}", self.base_url);
        let request = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .form(form);

        let (status, body) = HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            "POST",
            TOKEN_PATH,
            self.max_retries,
        )
        .await?;

        if !is_success(status) {
            let raw = parse_error_body(status, &body);
            log::warn!(
                "[{}] Token request rejected (HTTP {status}): {}",
                self.provider_name(),
                raw.message
            );
            return Err(if matches!(status, 400 | 401) {
                ProviderError::InvalidCredentials {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            } else {
                self.map_error(raw, ErrorContext::default())
            });
        }

        let response: TokenResponse = HttpUtils::parse_json(&body, self.provider_name())?;
        Ok(TokenSet::from_response(response, Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ultradns::types::ExpiresIn;

    fn response(expires_in: Option<ExpiresIn>) -> TokenResponse {
        TokenResponse {
            access_token: "access".to_string(),
            refresh_token: Some("refresh".to_string()),
            expires_in,
        }
    }

    #[test]
    fn expiry_computed_from_expires_in() {
        let now = Utc::now();
        let tokens = TokenSet::from_response(response(Some(ExpiresIn::Text("3600".into()))), now);
        assert_eq!(tokens.expires_at, Some(now + Duration::seconds(3600)));
        assert!(!tokens.is_expired(EXPIRY_THRESHOLD_SECS, now));
        assert!(tokens.is_expired(EXPIRY_THRESHOLD_SECS, now + Duration::seconds(3550)));
    }

    #[test]
    fn unknown_expiry_never_expires() {
        let now = Utc::now();
        let tokens = TokenSet::from_response(response(None), now);
        assert!(tokens.expires_at.is_none());
        assert!(!tokens.is_expired(EXPIRY_THRESHOLD_SECS, now + Duration::days(365)));
    }

    #[test]
    fn empty_refresh_token_dropped() {
        let resp = TokenResponse {
            access_token: "a".to_string(),
            refresh_token: Some(String::new()),
            expires_in: Some(ExpiresIn::Seconds(0)),
        };
        let tokens = TokenSet::from_response(resp, Utc::now());
        assert!(tokens.refresh_token.is_none());
        assert!(tokens.expires_at.is_none());
    }
}
