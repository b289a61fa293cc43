//! Data Transfer Objects for API requests and responses

pub mod account;
pub mod auth;
pub mod error;

pub use account::AccountRequest;
pub use auth::LoginRequest;
pub use error::{ErrorResponse, ErrorResponseExt};
