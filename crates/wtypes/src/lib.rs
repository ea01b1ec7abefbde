//! `wtypes` - composable runtime types backed by JSON Schema documents.
//!
//! A [`TypeDescriptor`] pairs a name and a base value kind with a
//! [`SchemaDocument`]. Descriptors are combined algebraically (`add`,
//! `all_of`, `any_of`, `one_of`, `negate`, bracket application through
//! [`TypeDescriptor::index`] and [`Modifier::apply`], comparison bounds), and
//! every combination passes the fixed meta-schema before it exists.
//!
//! Values are checked by a [`Validator`], the single strategy object that owns
//! the format checks, the forward-reference resolver and the options.
//! [`Validator::construct`] yields an [`Instance`]; containers are then
//! mutated through [`ObjValue`] / [`ArrValue`] guards that never commit a
//! state the instance's own schema rejects.
//!
//! ```
//! use serde_json::json;
//! use wtypes::{compare, CmpOp, TypeBuilder, Validator};
//!
//! let t = TypeBuilder::new();
//! let bounded = compare(10, CmpOp::Lt, &t.Integer())
//!     .and_then(|lower| compare(&lower, CmpOp::Lt, 100))
//!     .unwrap();
//!
//! let validator = Validator::new();
//! assert!(validator.is_valid(&bounded, &json!(50)));
//! assert!(!validator.is_valid(&bounded, &json!(10)));
//! assert!(!validator.is_valid(&bounded, &json!(100)));
//! ```

pub mod error;
pub mod evented;
pub mod metaschema;
pub mod schema;
pub mod type_def;
pub mod validator;
pub mod value;

pub use error::{
    Error, IllegalConstructionError, Result, SchemaDefinitionError, UnresolvedReferenceError,
    ValidationError,
};
pub use evented::{link, Change, Link, Observable};
pub use schema::{Keyword, SchemaDocument, SimpleType};
pub use type_def::{
    compare, compose, BaseKind, CmpOp, ComposeOp, Field, Modifier, ModuleType, NoResolver,
    Operand, SchemaArg, TypeBuilder, TypeDescriptor, TypeFactory, TypeFlags, TypeResolver,
};
pub use validator::{Validator, ValidatorOptions};
pub use value::{ArrValue, Instance, Mutation, ObjValue};
pub use wtypes_formats::{FormatValidator, Formats};
