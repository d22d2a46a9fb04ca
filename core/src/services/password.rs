//! Password hashing

use crate::errors::DomainError;

/// One-way password hashing
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Whether `password` matches `hash`
    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError>;
}

/// bcrypt-backed hasher
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// `cost` is clamped to bcrypt's valid range of 4..=31
    pub fn new(cost: u32) -> Self {
        Self {
            cost: cost.clamp(4, 31),
        }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        bcrypt::hash(password, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        match bcrypt::verify(password, hash) {
            Ok(matches) => Ok(matches),
            // a corrupt stored hash never matches
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash could not be parsed");
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
        let hasher = BcryptPasswordHasher::new(4);
        let hash = hasher.hash("s3cret!").unwrap();

        assert_ne!(hash, "s3cret!");
        assert!(hasher.verify("s3cret!", &hash).unwrap());
        assert!(!hasher.verify("wrong", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = BcryptPasswordHasher::new(4);
        assert_ne!(hasher.hash("same").unwrap(), hasher.hash("same").unwrap());
    }

    #[test]
    fn test_corrupt_hash_does_not_match() {
        let hasher = BcryptPasswordHasher::new(4);
        assert!(!hasher.verify("anything", "not-a-bcrypt-hash").unwrap());
    }

    #[test]
    fn test_cost_is_clamped() {
        let hash = BcryptPasswordHasher::new(1).hash("pw").unwrap();
        assert!(hash.starts_with("$2b$04$"), "{}", hash);
    }
}
