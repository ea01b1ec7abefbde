//! wtypes-util - JSON helpers shared by the wtypes crates.
//!
//! Structural equality and exact number comparison back the `enum`, `const`,
//! `uniqueItems` and numeric-bound keywords; the JSON Pointer helpers render
//! validation error locations and back the `json-pointer` string formats.

pub mod json_equal;
pub mod json_kind;
pub mod json_pointer;
pub mod number;
pub mod strings;

pub use json_equal::deep_equal;
pub use json_kind::kind_of;
pub use json_pointer::{
    escape_component, format_json_pointer, parse_json_pointer, unescape_component,
    validate_json_pointer, validate_relative_json_pointer, PointerError,
};
pub use number::{compare_numbers, exact_integer, is_integral, is_multiple_of};
pub use strings::lower_key;
