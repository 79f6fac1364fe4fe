//! Stateless service façade exposing the toolbox operations.
//!
//! Every method on [`ToolboxService`] is an async associated function, no instance needed.

pub(crate) mod whois;

use std::time::Duration;

use crate::error::{ToolboxError, ToolboxResult};
use crate::types::WhoisResult;

/// Default upper bound for one WHOIS lookup, referrals included.
pub const DEFAULT_WHOIS_TIMEOUT: Duration = Duration::from_secs(10);

/// Validate and normalise a domain name or IP address input.
///
/// Trims whitespace and a trailing root dot, passes through valid IP addresses
/// unchanged, converts internationalised domain names (IDN) to ASCII via
/// IDNA 2008, and rejects empty or overlong inputs.
fn validate_domain(domain: &str) -> ToolboxResult<String> {
    let domain = domain.trim().trim_end_matches('.');
    if domain.is_empty() {
        return Err(ToolboxError::ValidationError(
            "Domain name is required".to_string(),
        ));
    }
    // If it's a valid IP address, pass through without IDNA processing.
    if domain.parse::<std::net::IpAddr>().is_ok() {
        return Ok(domain.to_string());
    }
    // IDNA processing: converts Unicode labels to Punycode and validates.
    let ascii_domain = idna::domain_to_ascii_strict(domain)
        .map_err(|_| ToolboxError::ValidationError(format!("Invalid domain name: {domain}")))?;
    if ascii_domain.len() > 253 {
        return Err(ToolboxError::ValidationError(format!(
            "Domain name exceeds maximum length of 253 characters (got {})",
            ascii_domain.len()
        )));
    }
    Ok(ascii_domain)
}

/// Embedded WHOIS server mapping (TLD → server).
const WHOIS_SERVERS: &str = include_str!("whois_servers.json");

/// Entry point for WHOIS operations.
///
/// All methods are stateless associated functions; call them directly on the type.
///
/// ```rust,no_run
/// use zone_whois_toolbox::{DEFAULT_WHOIS_TIMEOUT, ToolboxService};
/// # async fn demo() -> zone_whois_toolbox::ToolboxResult<()> {
/// let info = ToolboxService::whois_lookup("example.com", DEFAULT_WHOIS_TIMEOUT).await?;
/// println!("{:?} {:?}", info.registrar, info.expiration_display());
/// # Ok(())
/// # }
/// ```
pub struct ToolboxService;

impl ToolboxService {
    /// Query WHOIS information for a domain.
    ///
    /// Returns structured registration data (registrar, dates, name servers, status)
    /// parsed from the raw WHOIS response. The whole lookup, including referral
    /// hops, is bounded by `timeout`.
    pub async fn whois_lookup(domain: &str, timeout: Duration) -> ToolboxResult<WhoisResult> {
        let domain = validate_domain(domain)?;
        whois::whois_lookup(&domain, WHOIS_SERVERS, timeout).await
    }
}

#[cfg(test)]
mod tests {
    use super::validate_domain;
    use crate::error::ToolboxError;

    #[test]
    fn test_validate_domain_normal() {
        assert_eq!(validate_domain("example.com").unwrap(), "example.com");
    }

    #[test]
    fn test_validate_domain_trailing_dot() {
        assert_eq!(validate_domain("example.com.").unwrap(), "example.com");
    }

    #[test]
    fn test_validate_domain_idn() {
        assert_eq!(validate_domain("münchen.de").unwrap(), "xn--mnchen-3ya.de");
    }

    #[test]
    fn test_validate_domain_ipv4_passthrough() {
        assert_eq!(validate_domain("1.2.3.4").unwrap(), "1.2.3.4");
    }

    #[test]
    fn test_validate_domain_trims_whitespace() {
        assert_eq!(validate_domain("  example.com  ").unwrap(), "example.com");
    }

    #[test]
    fn test_validate_domain_empty() {
        assert!(matches!(
            validate_domain(""),
            Err(ToolboxError::ValidationError(_))
        ));
        assert!(matches!(
            validate_domain("   "),
            Err(ToolboxError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_domain_too_long() {
        let label = "a".repeat(60);
        let domain = format!("{label}.{label}.{label}.{label}.{label}.com");
        assert!(matches!(
            validate_domain(&domain),
            Err(ToolboxError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_domain_invalid() {
        assert!(matches!(
            validate_domain("not a valid domain!!!"),
            Err(ToolboxError::ValidationError(_))
        ));
    }

    #[test]
    fn test_embedded_servers_parse() {
        let servers: serde_json::Value = serde_json::from_str(super::WHOIS_SERVERS).unwrap();
        assert_eq!(servers[""], "whois.iana.org");
        assert_eq!(servers["com"], "whois.verisign-grs.com");
    }
}
