pub mod factory;
pub mod remote;
pub mod validator;

pub use factory::build_auth_validator;
pub use remote::RemoteAuthValidator;
pub use validator::{AuthValidator, ValidatorError, Verified};
