//! Token service module for JWT management
//!
//! Access tokens are HS256 JWTs carrying the account id as subject. There
//! are no refresh tokens; clients log in again once a token expires.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::{IssuedToken, TokenService};
