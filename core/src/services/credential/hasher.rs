use crate::errors::DomainError;

/// Lowest work factor bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;

/// One-way password hashing
pub trait CredentialHasher: Send + Sync {
    /// Produces a salted digest of `plaintext`
    fn hash(&self, plaintext: &str) -> Result<String, DomainError>;

    /// Checks `plaintext` against a digest produced by [`CredentialHasher::hash`]
    fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, DomainError>;
}

/// bcrypt with a configurable work factor
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl CredentialHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Failed to hash password: {}", e),
        })
    }

    fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, DomainError> {
        match bcrypt::verify(plaintext, digest) {
            Ok(matches) => Ok(matches),
            // A stored value that bcrypt cannot parse never matches
            Err(e) => {
                tracing::warn!(error = %e, "Stored password digest could not be checked");
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = BcryptHasher::new(MIN_BCRYPT_COST);
        let digest = hasher.hash("s3cret").unwrap();

        assert_ne!(digest, "s3cret");
        assert!(digest.starts_with("$2"));
        assert!(hasher.verify("s3cret", &digest).unwrap());
        assert!(!hasher.verify("wrong", &digest).unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = BcryptHasher::new(MIN_BCRYPT_COST);
        let a = hasher.hash("same").unwrap();
        let b = hasher.hash("same").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_against_non_bcrypt_value() {
        let hasher = BcryptHasher::new(MIN_BCRYPT_COST);
        assert!(!hasher.verify("plain", "plain").unwrap());
    }

    #[test]
    fn test_invalid_cost_is_internal_error() {
        let hasher = BcryptHasher::new(99);
        assert!(matches!(hasher.hash("x"), Err(DomainError::Internal { .. })));
    }
}
