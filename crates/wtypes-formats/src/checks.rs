//! Individual format checks.
//!
//! Each check is a pure `fn(&str) -> bool`. Dates and times are parsed with
//! `chrono`, URIs with `url`, IP addresses with the standard library parsers.

use chrono::{DateTime, NaiveDate};
use regex::Regex;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::OnceLock;
use url::{ParseError, Url};

use wtypes_util::{validate_json_pointer, validate_relative_json_pointer};

type Cached = OnceLock<Option<Regex>>;

fn cached(cell: &'static Cached, pattern: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| Regex::new(pattern).ok()).as_ref()
}

fn shaped(cell: &'static Cached, pattern: &str, s: &str) -> bool {
    cached(cell, pattern).is_some_and(|re| re.is_match(s))
}

/// RFC 3339 `full-date`.
pub fn is_date(s: &str) -> bool {
    static DATE: Cached = OnceLock::new();
    shaped(&DATE, r"^\d{4}-\d{2}-\d{2}$", s) && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// RFC 3339 `full-time`: the offset is mandatory, a leap second is allowed.
pub fn is_time(s: &str) -> bool {
    static TIME: Cached = OnceLock::new();
    shaped(
        &TIME,
        r"^\d{2}:\d{2}:\d{2}(\.\d+)?([zZ]|[+-]\d{2}:\d{2})$",
        s,
    ) && DateTime::parse_from_rfc3339(&format!("1970-01-01T{}", s.to_ascii_uppercase())).is_ok()
}

/// RFC 3339 `date-time` with a `T` separator.
pub fn is_date_time(s: &str) -> bool {
    match s.split_once(['T', 't']) {
        Some((date, time)) => is_date(date) && is_time(time),
        None => false,
    }
}

/// A mailbox with a non-empty local part and domain.
pub fn is_email(s: &str) -> bool {
    s.is_ascii() && is_idn_email(s)
}

pub fn is_idn_email(s: &str) -> bool {
    match s.rsplit_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !local.contains('@')
                && !s.chars().any(|c| c.is_whitespace() || c.is_control())
                && is_mail_domain(domain)
        }
        None => false,
    }
}

fn is_mail_domain(domain: &str) -> bool {
    match domain.strip_prefix('[').and_then(|d| d.strip_suffix(']')) {
        Some(literal) => match literal.strip_prefix("IPv6:") {
            Some(v6) => is_ipv6(v6),
            None => is_ipv4(literal),
        },
        None => is_idn_hostname(domain),
    }
}

fn hostname_labels(s: &str, label_ok: impl Fn(&str) -> bool) -> bool {
    let host = s.strip_suffix('.').unwrap_or(s);
    if host.is_empty() || host.chars().count() > 253 {
        return false;
    }
    host.split('.').all(|label| {
        let len = label.chars().count();
        (1..=63).contains(&len)
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label_ok(label)
    })
}

/// RFC 1123 host name.
pub fn is_hostname(s: &str) -> bool {
    hostname_labels(s, |label| {
        label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

/// Internationalized host name: labels may carry any alphanumeric character.
pub fn is_idn_hostname(s: &str) -> bool {
    hostname_labels(s, |label| label.chars().all(|c| c.is_alphanumeric() || c == '-'))
}

pub fn is_ipv4(s: &str) -> bool {
    s.parse::<Ipv4Addr>().is_ok()
}

pub fn is_ipv6(s: &str) -> bool {
    s.parse::<Ipv6Addr>().is_ok()
}

fn reference_chars_ok(s: &str) -> bool {
    !s.chars().any(|c| {
        c.is_whitespace() || c.is_control() || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '\\' | '^' | '`')
    })
}

fn parses_absolute(s: &str) -> bool {
    reference_chars_ok(s) && Url::parse(s).is_ok()
}

/// Relative references are resolved against a fixed base before parsing.
fn parses_reference(s: &str) -> bool {
    if !reference_chars_ok(s) {
        return false;
    }
    match Url::parse(s) {
        Ok(_) => true,
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse("http://base.invalid/")
            .and_then(|base| base.join(s))
            .is_ok(),
        Err(_) => false,
    }
}

/// Absolute URI (RFC 3986).
pub fn is_uri(s: &str) -> bool {
    s.is_ascii() && parses_absolute(s)
}

pub fn is_uri_reference(s: &str) -> bool {
    s.is_ascii() && parses_reference(s)
}

/// Absolute IRI (RFC 3987): like a URI, non-ASCII characters allowed.
pub fn is_iri(s: &str) -> bool {
    parses_absolute(s)
}

pub fn is_iri_reference(s: &str) -> bool {
    parses_reference(s)
}

/// RFC 6570 template: braces balance and do not nest.
pub fn is_uri_template(s: &str) -> bool {
    let mut open = false;
    for c in s.chars() {
        match c {
            '{' if open => return false,
            '{' => open = true,
            '}' if !open => return false,
            '}' => open = false,
            c if c.is_whitespace() => return false,
            _ => {}
        }
    }
    !open
}

pub fn is_json_pointer(s: &str) -> bool {
    validate_json_pointer(s).is_ok()
}

pub fn is_relative_json_pointer(s: &str) -> bool {
    validate_relative_json_pointer(s).is_ok()
}

pub fn is_regex(s: &str) -> bool {
    Regex::new(s).is_ok()
}

const CSS21_COLORS: &[&str] = &[
    "aqua", "black", "blue", "fuchsia", "gray", "green", "lime", "maroon", "navy", "olive",
    "orange", "purple", "red", "silver", "teal", "white", "yellow",
];

/// CSS 2.1 color: a named color or a `#rgb` / `#rrggbb` hex triplet.
pub fn is_color(s: &str) -> bool {
    if let Some(hex) = s.strip_prefix('#') {
        return matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    let lower = s.to_ascii_lowercase();
    CSS21_COLORS.contains(&lower.as_str())
}
