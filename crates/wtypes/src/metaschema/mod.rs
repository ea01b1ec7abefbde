#[allow(clippy::module_inception)]
pub mod metaschema;

pub use metaschema::{is_meta_valid, validate_document};
