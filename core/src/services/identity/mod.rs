//! Bearer-token identity resolution.

mod verifier;


pub use verifier::IdentityVerifier;
