//! Password hashing and verification.
//!
//! New hashes are Argon2id PHC strings (`$argon2id$v=19$m=..,t=..,p=..$salt$hash`).
//! Verification also accepts bcrypt modular-crypt strings (`$2a$`, `$2b$`,
//! `$2y$`), which is what existing accounts store. Either way the cost and
//! salt travel with the stored value.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use serde::{Deserialize, Serialize};

use crate::constants::{
    BCRYPT_HASH_PREFIX, DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB,
    DEFAULT_HASH_PARALLELISM,
};
use crate::error::{DomainError, DomainResult};

/// Check a plaintext password against a stored hash.
///
/// Returns `false` for a wrong password and also for a malformed or
/// unsupported hash; callers cannot tell the two apart.
pub fn verify_password(plain_text: &str, stored_hash: &str) -> bool {
    if stored_hash.starts_with(BCRYPT_HASH_PREFIX) {
        return bcrypt::verify(plain_text, stored_hash).unwrap_or(false);
    }
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(plain_text.as_bytes(), &parsed)
        .is_ok()
}

/// Argon2 cost parameters used when producing new hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashingParams {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes
    pub iterations: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for HashingParams {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_HASH_MEMORY_KIB,
            iterations: DEFAULT_HASH_ITERATIONS,
            parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

impl HashingParams {
    fn argon2(&self) -> DomainResult<Argon2<'static>> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| DomainError::password(format!("Invalid hashing parameters: {}", e)))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Password hash value object.
///
/// Immutable, compared by hash string.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plain text password with default parameters and a random salt.
    ///
    /// Empty passwords are hashed like any other input.
    pub fn hash(plain_text: &str) -> DomainResult<Self> {
        Self::hash_with(plain_text, &HashingParams::default())
    }

    /// Hash a plain text password with explicit cost parameters.
    ///
    /// # Errors
    /// Returns a password error if the parameters are out of range.
    pub fn hash_with(plain_text: &str, params: &HashingParams) -> DomainResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = params
            .argon2()?
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::password(format!("Password hash failed: {}", e)))?;
        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Wrap an existing hash (from storage).
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    pub fn verify(&self, plain_text: &str) -> bool {
        verify_password(plain_text, &self.hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Small costs keep the tests fast; verification reads them from the hash.
    fn fast() -> HashingParams {
        HashingParams {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn test_verify_matching_password() {
        let hash = Password::hash_with("SecurePassword123!", &fast()).unwrap();
        assert!(verify_password("SecurePassword123!", hash.as_str()));
    }

    #[test]
    fn test_verify_wrong_password() {
        let hash = Password::hash_with("SecurePassword123!", &fast()).unwrap();
        assert!(!verify_password("WrongPassword123", hash.as_str()));
        assert!(!verify_password("securepassword123!", hash.as_str()));
    }

    #[test]
    fn test_verify_malformed_hash_is_false() {
        assert!(!verify_password("anything", "not-a-valid-hash"));
        assert!(!verify_password("anything", ""));
        assert!(!verify_password("", "$argon2id$v=19$m=1024,t=1,p=1$broken"));
    }

    #[test]
    fn test_verify_bcrypt_hash() {
        let stored = bcrypt::hash("secret123", 4).unwrap();
        assert!(stored.starts_with("$2b$04$"));
        assert!(verify_password("secret123", &stored));
        assert!(!verify_password("secret124", &stored));
    }

    #[test]
    fn test_verify_bcrypt_2a_and_empty_password() {
        let stored = bcrypt::hash_with_result("", 4)
            .unwrap()
            .format_for_version(bcrypt::Version::TwoA);
        assert!(stored.starts_with("$2a$"));
        assert!(verify_password("", &stored));
        assert!(!verify_password("x", &stored));
    }

    #[test]
    fn test_verify_malformed_bcrypt_is_false() {
        assert!(!verify_password("secret123", "$2b$04$truncated"));
        assert!(!verify_password("secret123", "$2"));
    }

    #[test]
    fn test_verify_unsupported_algorithm_is_false() {
        let scrypt = "$scrypt$ln=4,r=8,p=1$c2FsdHNhbHQ$aGFzaGhhc2g";
        assert!(!verify_password("abc", scrypt));
    }

    #[test]
    fn test_verify_empty_password() {
        let hash = Password::hash_with("", &fast()).unwrap();
        assert!(verify_password("", hash.as_str()));
        assert!(!verify_password(" ", hash.as_str()));
    }

    #[test]
    fn test_default_params_hash_verifies() {
        let password = Password::hash("TestPassword123").unwrap();
        assert!(password.as_str().starts_with("$argon2id$"));
        assert!(password.verify("TestPassword123"));
    }

    #[test]
    fn test_verify_ignores_configured_params() {
        // Hashed with one cost, verified through the default instance
        let custom = HashingParams {
            memory_kib: 2048,
            iterations: 3,
            parallelism: 2,
        };
        let hash = Password::hash_with("pa55", &custom).unwrap();
        assert!(hash.as_str().contains("m=2048,t=3,p=2"));
        assert!(verify_password("pa55", hash.as_str()));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = HashingParams {
            memory_kib: 1024,
            iterations: 0,
            parallelism: 1,
        };
        let err = Password::hash_with("pw", &params).unwrap_err();
        assert!(matches!(err, DomainError::Password(_)));
    }

    #[test]
    fn test_same_password_different_salts() {
        let plain = "SamePassword123";
        let pass1 = Password::hash_with(plain, &fast()).unwrap();
        let pass2 = Password::hash_with(plain, &fast()).unwrap();

        assert_ne!(pass1.as_str(), pass2.as_str());
        assert!(pass1.verify(plain));
        assert!(pass2.verify(plain));
    }

    #[test]
    fn test_password_from_hash() {
        let hash = Password::hash_with("TestPassword123", &fast())
            .unwrap()
            .into_string();

        let restored = Password::from_hash(hash);
        assert!(restored.verify("TestPassword123"));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::from_hash("$argon2id$secret");
        let debug = format!("{:?}", password);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("secret"));
    }
}
