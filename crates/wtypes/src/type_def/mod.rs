//! Type descriptors, the factory that creates them, and the algebra that
//! combines them.

pub mod algebra;
pub mod arg;
pub mod builder;
pub mod descriptor;
pub mod factory;
pub mod kind;
pub mod modifier;
pub mod module_type;

pub use algebra::{compare, compose, CmpOp, ComposeOp, Operand};
pub use arg::SchemaArg;
pub use builder::TypeBuilder;
pub use descriptor::{TypeDescriptor, TypeFlags};
pub use factory::{Field, TypeFactory};
pub use kind::BaseKind;
pub use modifier::Modifier;
pub use module_type::{ModuleType, NoResolver, TypeResolver};
