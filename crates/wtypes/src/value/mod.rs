//! Validated instances and the guards that mutate them.

pub mod arr_value;
pub mod instance;
pub mod mutation;
pub mod obj_value;

pub use arr_value::ArrValue;
pub use instance::Instance;
pub use mutation::Mutation;
pub use obj_value::ObjValue;
