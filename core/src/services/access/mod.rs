//! Access service: authentication, ownership-scoped account mutation and
//! favorites, composed per endpoint.

mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use service::AccessService;
pub use validation::{validate_account_input, MIN_USERNAME_LENGTH};
