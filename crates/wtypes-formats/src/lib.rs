//! wtypes-formats - string-format checks for the `format` keyword.
//!
//! The validation engine does not know any format itself; it asks a
//! [`FormatValidator`]. [`Formats::standard`] covers the draft-7 format
//! names, and applications can register their own checks with
//! [`Formats::with`].
//!
//! ```
//! use wtypes_formats::{FormatValidator, Formats};
//!
//! let formats = Formats::standard().with("even-length", |s: &str| s.len() % 2 == 0);
//! assert!(formats.validate_format("2020-02-29", "date"));
//! assert!(!formats.validate_format("2021-02-29", "date"));
//! assert!(formats.validate_format("ab", "even-length"));
//! assert!(!formats.supports("no-such-format"));
//! ```

pub mod checks;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// The format-validation capability consumed by the engine.
///
/// Implementations must be pure: the same value and format name always give
/// the same answer, without side effects.
pub trait FormatValidator: Send + Sync {
    /// Whether `format` is a name this validator knows.
    fn supports(&self, format: &str) -> bool;

    /// Checks `value` against `format`. Unknown formats return `false`.
    fn validate_format(&self, value: &str, format: &str) -> bool;
}

/// A single format check.
pub type CheckFn = Arc<dyn Fn(&str) -> bool + Send + Sync>;

const STANDARD: &[(&str, fn(&str) -> bool)] = &[
    ("date-time", checks::is_date_time),
    ("date", checks::is_date),
    ("time", checks::is_time),
    ("email", checks::is_email),
    ("idn-email", checks::is_idn_email),
    ("hostname", checks::is_hostname),
    ("idn-hostname", checks::is_idn_hostname),
    ("ipv4", checks::is_ipv4),
    ("ipv6", checks::is_ipv6),
    ("uri", checks::is_uri),
    ("uri-reference", checks::is_uri_reference),
    ("iri", checks::is_iri),
    ("iri-reference", checks::is_iri_reference),
    ("uri-template", checks::is_uri_template),
    ("json-pointer", checks::is_json_pointer),
    ("relative-json-pointer", checks::is_relative_json_pointer),
    ("regex", checks::is_regex),
    ("color", checks::is_color),
];

/// A table of named format checks.
#[derive(Clone, Default)]
pub struct Formats {
    checks: HashMap<String, CheckFn>,
}

impl Formats {
    /// A table with no formats at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The draft-7 format names.
    pub fn standard() -> Self {
        let mut formats = Self::empty();
        for (name, check) in STANDARD {
            formats.checks.insert((*name).to_string(), Arc::new(*check));
        }
        formats
    }

    /// Registers (or replaces) a format check.
    pub fn with(
        mut self,
        name: impl Into<String>,
        check: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.checks.insert(name.into(), Arc::new(check));
        self
    }

    /// Registered format names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.checks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for Formats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formats").field("names", &self.names()).finish()
    }
}

impl FormatValidator for Formats {
    fn supports(&self, format: &str) -> bool {
        self.checks.contains_key(format)
    }

    fn validate_format(&self, value: &str, format: &str) -> bool {
        self.checks.get(format).is_some_and(|check| check(value))
    }
}
