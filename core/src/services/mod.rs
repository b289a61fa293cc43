//! Business services containing domain logic and use cases.

pub mod access;
pub mod credential;
pub mod identity;
pub mod token;

// Re-export commonly used types
pub use access::{validate_account_input, AccessService};
pub use credential::{BcryptHasher, CredentialHasher};
pub use identity::IdentityVerifier;
pub use token::{IssuedToken, TokenService, TokenServiceConfig};
