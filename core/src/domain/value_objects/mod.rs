//! Value objects representing immutable domain concepts.

pub mod account_input;
pub mod account_profile;
pub mod auth_response;
pub mod identity;

// Re-export commonly used types
pub use account_input::AccountInput;
pub use account_profile::AccountProfile;
pub use auth_response::AuthResponse;
pub use identity::Identity;
