//! Schema documents and the keyword vocabulary.

pub mod document;
pub mod keyword;

pub use document::SchemaDocument;
pub use keyword::{Keyword, SimpleType};
