//! Log sanitization utilities
//!
//! Keeps bearer/refresh tokens out of debug logs and bounds the size of
//! logged response bodies.

use serde_json::Value;

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Placeholder written instead of secret values.
const REDACTED: &str = "<redacted>";

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit, otherwise the first
/// `TRUNCATE_LIMIT` bytes (on a char boundary) with the total length appended.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Redact token fields of a JSON body, then truncate it.
///
/// Any object key containing `token` or `password` (case-insensitive) has its
/// value replaced. Non-JSON bodies are only truncated.
pub fn sanitize_for_log(body: &str) -> String {
    if let Ok(mut value) = serde_json::from_str::<Value>(body)
        && redact_secrets(&mut value)
    {
        return truncate_for_log(&value.to_string());
    }
    truncate_for_log(body)
}

/// Returns whether anything was redacted.
fn redact_secrets(value: &mut Value) -> bool {
    match value {
        Value::Object(map) => {
            let mut redacted = false;
            for (key, field) in map.iter_mut() {
                let key = key.to_ascii_lowercase();
                if key.contains("token") || key.contains("password") {
                    *field = Value::String(REDACTED.to_string());
                    redacted = true;
                } else {
                    redacted |= redact_secrets(field);
                }
            }
            redacted
        }
        Value::Array(items) => items
            .iter_mut()
            .fold(false, |acc, item| redact_secrets(item) || acc),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        let s = "hello world";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
        assert!(result.contains(&format!("{} bytes]", TRUNCATE_LIMIT + 100)));
    }

    #[test]
    fn multibyte_chars_safe() {
        let s = "é".repeat(200);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }

    #[test]
    fn token_fields_redacted() {
        let body = r#"{"accessToken":"abc123","refreshToken":"def456","expiresIn":"3600"}"#;
        let result = sanitize_for_log(body);
        assert!(!result.contains("abc123"));
        assert!(!result.contains("def456"));
        assert!(result.contains("3600"));
    }

    #[test]
    fn nested_fields_redacted() {
        let body = r#"[{"auth":{"access_token":"xyz"}}]"#;
        let result = sanitize_for_log(body);
        assert!(!result.contains("xyz"));
    }

    #[test]
    fn plain_body_passes_through() {
        assert_eq!(sanitize_for_log("not json"), "not json");
        let body = r#"{"zones":[]}"#;
        assert_eq!(sanitize_for_log(body), body);
    }
}
