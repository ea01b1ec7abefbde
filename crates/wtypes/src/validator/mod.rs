pub mod types;
#[allow(clippy::module_inception)]
pub mod validator;

pub use types::ValidatorOptions;
pub use validator::Validator;
