//! Password hashing behind a trait so tests and services share one seam.

mod hasher;

pub use hasher::{BcryptHasher, CredentialHasher, MIN_BCRYPT_COST};
