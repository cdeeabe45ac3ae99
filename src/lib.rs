pub mod api;
pub mod error;
pub mod lifecycle;
pub mod results;
pub mod types;
pub mod validate;

pub use api::ApiClient;
pub use error::{Error, Result, ValidationError};
