//! UltraDNS error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::UltraDnsProvider;
use super::types::UltraErrorBody;

/// Turn an error response body into a [`RawApiError`].
///
/// Bodies that are not the documented JSON shape keep the raw text as message.
pub(crate) fn parse_error_body(status: u16, body: &str) -> RawApiError {
    let parsed = serde_json::from_str::<UltraErrorBody>(body)
        .ok()
        .and_then(UltraErrorBody::into_first);

    match parsed {
        Some(err) => {
            let message = err
                .error_message
                .or(err.error_description)
                .or(err.error)
                .unwrap_or_else(|| format!("HTTP {status}"));
            match err.error_code {
                Some(code) => RawApiError::with_code(status, code.to_string(), message),
                None => RawApiError::new(status, message),
            }
        }
        None if body.trim().is_empty() => RawApiError::new(status, format!("HTTP {status}")),
        None => RawApiError::new(status, body.trim()),
    }
}

/// UltraDNS error code mapping
impl ProviderErrorMapper for UltraDnsProvider {
    fn provider_name(&self) -> &'static str {
        "ultradns"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match (raw.code.as_deref(), raw.status) {
            // 60001: invalid_grant (bad password, expired or revoked token)
            (Some("60001"), _) | (_, 401) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // 1801: Zone does not exist in the system
            (Some("1801"), _) => ProviderError::ZoneNotFound {
                provider: self.provider_name().to_string(),
                zone: context.zone.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            // 70002: Data not found (no record set of the requested type)
            (Some("70002"), _) => ProviderError::RecordNotFound {
                provider: self.provider_name().to_string(),
                zone: context.zone.unwrap_or_else(|| "<unknown>".to_string()),
                record_type: context
                    .record_type
                    .unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            // 56001: Cannot find resource policy for the user
            (Some("56001"), _) | (_, 403) => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // 57001 / 400: invalid input
            (Some("57001"), _) | (None, 400) => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "request".to_string(),
                detail: raw.message,
            },

            (None, 404) => match context.record_type {
                Some(record_type) => ProviderError::RecordNotFound {
                    provider: self.provider_name().to_string(),
                    zone: context.zone.unwrap_or_else(|| "<unknown>".to_string()),
                    record_type,
                    raw_message: Some(raw.message),
                },
                None => ProviderError::ZoneNotFound {
                    provider: self.provider_name().to_string(),
                    zone: context.zone.unwrap_or_else(|| "<unknown>".to_string()),
                    raw_message: Some(raw.message),
                },
            },

            _ => self.unknown_error(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ProviderCredentials, ProviderOptions};

    fn provider() -> UltraDnsProvider {
        UltraDnsProvider::new(
            ProviderCredentials::Token {
                access_token: String::new(),
                refresh_token: None,
            },
            ProviderOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn parse_body_list() {
        let raw = parse_error_body(
            404,
            r#"[{"errorCode":1801,"errorMessage":"Zone does not exist in the system."}]"#,
        );
        assert_eq!(raw.code.as_deref(), Some("1801"));
        assert_eq!(raw.message, "Zone does not exist in the system.");
    }

    #[test]
    fn parse_body_oauth_style() {
        let raw = parse_error_body(
            400,
            r#"{"errorCode":60001,"error":"invalid_grant","error_description":"60001: invalid_grant:Invalid username & password combination."}"#,
        );
        assert_eq!(raw.code.as_deref(), Some("60001"));
        assert!(raw.message.contains("Invalid username"));
    }

    #[test]
    fn parse_body_plain_text() {
        let raw = parse_error_body(500, "Internal Server Error");
        assert!(raw.code.is_none());
        assert_eq!(raw.message, "Internal Server Error");

        let raw = parse_error_body(500, "");
        assert_eq!(raw.message, "HTTP 500");
    }

    #[test]
    fn invalid_grant_maps_to_credentials() {
        let p = provider();
        let err = p.map_error(
            RawApiError::with_code(400, "60001", "invalid_grant"),
            ErrorContext::default(),
        );
        assert!(matches!(err, ProviderError::InvalidCredentials { .. }));
    }

    #[test]
    fn unauthorized_status_maps_to_credentials() {
        let p = provider();
        let err = p.map_error(RawApiError::new(401, "unauthorized"), ErrorContext::default());
        assert!(matches!(err, ProviderError::InvalidCredentials { .. }));
    }

    #[test]
    fn zone_missing_uses_context() {
        let p = provider();
        let err = p.map_error(
            RawApiError::with_code(404, "1801", "Zone does not exist in the system."),
            ErrorContext {
                zone: Some("example.com".to_string()),
                record_type: None,
            },
        );
        assert!(matches!(
            err,
            ProviderError::ZoneNotFound { zone, .. } if zone == "example.com"
        ));
    }

    #[test]
    fn data_not_found_maps_to_record() {
        let p = provider();
        let err = p.map_error(
            RawApiError::with_code(404, "70002", "Data not found."),
            ErrorContext::record("example.com", "SOA"),
        );
        assert!(matches!(
            err,
            ProviderError::RecordNotFound { record_type, .. } if record_type == "SOA"
        ));
    }

    #[test]
    fn bare_404_on_record_lookup() {
        let p = provider();
        let err = p.map_error(
            RawApiError::new(404, "not found"),
            ErrorContext::record("example.com", "SOA"),
        );
        assert!(matches!(err, ProviderError::RecordNotFound { .. }));
    }

    #[test]
    fn forbidden_maps_to_permission_denied() {
        let p = provider();
        let err = p.map_error(RawApiError::new(403, "forbidden"), ErrorContext::default());
        assert!(matches!(err, ProviderError::PermissionDenied { .. }));
    }

    #[test]
    fn unmapped_code_falls_back_to_unknown() {
        let p = provider();
        let err = p.map_error(
            RawApiError::with_code(500, "99999", "boom"),
            ErrorContext::default(),
        );
        assert!(matches!(
            err,
            ProviderError::Unknown { raw_code: Some(code), .. } if code == "99999"
        ));
    }
}
