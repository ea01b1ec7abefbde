//! JSON Pointer (RFC 6901) helpers.
//!
//! Used to render the location of a validation failure and to check the
//! `json-pointer` / `relative-json-pointer` string formats.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    #[error("POINTER_INVALID")]
    PointerInvalid,
    #[error("INVALID_ESCAPE")]
    InvalidEscape,
    #[error("RELATIVE_POINTER_INVALID")]
    RelativePointerInvalid,
}

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// ```
/// use wtypes_util::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // ~1 before ~0, otherwise "~01" would decode to "/"
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a JSON Pointer path component.
///
/// ```
/// use wtypes_util::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Parses a JSON Pointer into unescaped path components.
///
/// The empty pointer is the root and yields no components.
pub fn parse_json_pointer(pointer: &str) -> Vec<String> {
    match pointer.strip_prefix('/') {
        Some(rest) => rest.split('/').map(unescape_component).collect(),
        None => Vec::new(),
    }
}

/// Formats path components into a JSON Pointer string.
///
/// ```
/// use wtypes_util::format_json_pointer;
///
/// assert_eq!(format_json_pointer(&[]), "");
/// assert_eq!(format_json_pointer(&["a/b".to_string(), "0".to_string()]), "/a~1b/0");
/// ```
pub fn format_json_pointer(path: &[String]) -> String {
    let mut out = String::new();
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Validates a JSON Pointer string.
///
/// A pointer is either empty (the root) or starts with `/`, and every `~`
/// is followed by `0` or `1`.
pub fn validate_json_pointer(pointer: &str) -> Result<(), PointerError> {
    if pointer.is_empty() {
        return Ok(());
    }
    if !pointer.starts_with('/') {
        return Err(PointerError::PointerInvalid);
    }
    let mut chars = pointer.chars();
    while let Some(c) = chars.next() {
        if c == '~' && !matches!(chars.next(), Some('0') | Some('1')) {
            return Err(PointerError::InvalidEscape);
        }
    }
    Ok(())
}

/// Validates a relative JSON Pointer: a non-negative integer prefix without
/// leading zeros, followed by `#` or by a JSON Pointer.
///
/// ```
/// use wtypes_util::validate_relative_json_pointer;
///
/// assert!(validate_relative_json_pointer("0").is_ok());
/// assert!(validate_relative_json_pointer("1/foo~1bar").is_ok());
/// assert!(validate_relative_json_pointer("2#").is_ok());
/// assert!(validate_relative_json_pointer("01/a").is_err());
/// assert!(validate_relative_json_pointer("/a").is_err());
/// ```
pub fn validate_relative_json_pointer(pointer: &str) -> Result<(), PointerError> {
    let digits = pointer.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 || (digits > 1 && pointer.starts_with('0')) {
        return Err(PointerError::RelativePointerInvalid);
    }
    let rest = &pointer[digits..];
    if rest == "#" {
        return Ok(());
    }
    validate_json_pointer(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_format_agree() {
        let path = parse_json_pointer("/a~0b/c~1d/");
        assert_eq!(path, vec!["a~b", "c/d", ""]);
        assert_eq!(format_json_pointer(&path), "/a~0b/c~1d/");
    }

    #[test]
    fn root_pointer() {
        assert!(parse_json_pointer("").is_empty());
        assert_eq!(validate_json_pointer(""), Ok(()));
    }

    #[test]
    fn rejects_missing_slash() {
        assert_eq!(validate_json_pointer("foo"), Err(PointerError::PointerInvalid));
    }

    #[test]
    fn rejects_dangling_escape() {
        assert_eq!(validate_json_pointer("/foo~"), Err(PointerError::InvalidEscape));
        assert_eq!(validate_json_pointer("/foo~2"), Err(PointerError::InvalidEscape));
        assert_eq!(validate_json_pointer("/foo~0~1"), Ok(()));
    }
}
