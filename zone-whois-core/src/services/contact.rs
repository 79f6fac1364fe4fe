//! SOA contact
//!
//! The RNAME field of an SOA record encodes a mailbox as a domain name. Dots
//! inside the local part are escaped as `\.` (RFC 1035 §8).
//!
//! By default the contact is the RNAME with `\.` unescaped and everything else
//! kept, trailing root dot included: `hostmaster\.dns.example.com.` becomes
//! `hostmaster.dns.example.com.`. With mailbox decoding the first unescaped dot
//! becomes `@` and the root dot is dropped: `hostmaster.dns@example.com`.

use crate::error::{CoreError, CoreResult};
use crate::types::SoaRecord;

/// Contact of a zone, read from its SOA RNAME.
///
/// `mailbox` selects [`rname_to_email`] instead of [`unescape_rname`].
pub fn contact_email(soa: &SoaRecord, mailbox: bool) -> CoreResult<String> {
    let rname = soa.rname().ok_or_else(|| CoreError::MalformedSoa {
        zone: soa.zone.clone(),
        detail: format!("no RNAME in rdata '{}'", soa.rdata),
    })?;

    if !mailbox {
        return Ok(unescape_rname(rname));
    }

    rname_to_email(rname).ok_or_else(|| CoreError::MalformedSoa {
        zone: soa.zone.clone(),
        detail: format!("RNAME '{rname}' is not a mailbox"),
    })
}

/// RNAME with escaped dots turned into plain dots.
pub fn unescape_rname(rname: &str) -> String {
    rname.replace("\\.", ".")
}

/// Decode an RNAME into `local@domain`.
///
/// An RNAME that already contains `@` is only unescaped. Returns `None` for
/// the root name or a name without an unescaped dot.
pub fn rname_to_email(rname: &str) -> Option<String> {
    let rname = strip_root_dot(rname.trim());
    if rname.is_empty() {
        return None;
    }

    let already_mailbox = rname.contains('@');
    let mut email = String::with_capacity(rname.len());
    let mut separated = already_mailbox;
    let mut chars = rname.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let digits: String = chars.clone().take(3).collect();
                if digits.len() == 3 && digits.chars().all(|d| d.is_ascii_digit()) {
                    let code: u32 = digits.parse().ok()?;
                    email.push(char::from_u32(code)?);
                    chars.nth(2);
                } else if let Some(escaped) = chars.next() {
                    email.push(escaped);
                }
            }
            '.' if !separated => {
                email.push('@');
                separated = true;
            }
            _ => email.push(c),
        }
    }

    (separated && !email.starts_with('@') && !email.ends_with('@')).then_some(email)
}

/// Drop the trailing root dot unless it is escaped.
fn strip_root_dot(name: &str) -> &str {
    let Some(stripped) = name.strip_suffix('.') else {
        return name;
    };
    let backslashes = stripped.chars().rev().take_while(|c| *c == '\\').count();
    if backslashes % 2 == 0 { stripped } else { name }
}
