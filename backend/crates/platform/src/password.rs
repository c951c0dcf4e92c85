//! Argon2id password hashing
//!
//! Hashes are PHC strings (`$argon2id$v=19$...`) so parameters and salt travel
//! with the hash. An optional pepper is appended to the password bytes before
//! hashing and must be supplied again to verify.
//!
//! Only the empty password is refused; callers own any strength policy.

use std::fmt;

use argon2::{Argon2, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("password is empty")]
    Empty,
}

#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("argon2 failed: {0}")]
    HashingFailed(argon2::password_hash::Error),

    #[error("stored password hash is not a valid PHC string")]
    InvalidHashFormat,
}

/// A password as typed by the user, wiped from memory on drop
///
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("p1".to_string()).unwrap();
/// let hashed = password.hash(None).unwrap();
/// assert!(hashed.verify(&password, None));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        if raw.is_empty() {
            Err(PasswordPolicyError::Empty)
        } else {
            Ok(Self(raw))
        }
    }

    fn with_pepper(&self, pepper: Option<&[u8]>) -> Zeroizing<Vec<u8>> {
        let pepper = pepper.unwrap_or_default();
        let mut bytes = Zeroizing::new(Vec::with_capacity(self.0.len() + pepper.len()));
        bytes.extend_from_slice(self.0.as_bytes());
        bytes.extend_from_slice(pepper);
        bytes
    }

    /// Hash with Argon2id defaults (19 MiB, t=2, p=1) and a fresh salt
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        let phc = Argon2::default()
            .hash_password(&self.with_pepper(pepper), &salt)
            .map_err(PasswordHashError::HashingFailed)?
            .to_string();
        Ok(HashedPassword(phc))
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClearTextPassword(***)")
    }
}

/// A stored Argon2 hash
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Accept a PHC string read back from storage
    pub fn from_phc_string(phc: impl Into<String>) -> Result<Self, PasswordHashError> {
        let phc = phc.into();
        argon2::PasswordHash::new(&phc).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self(phc))
    }

    pub fn as_phc_string(&self) -> &str {
        &self.0
    }

    /// Constant-time check of `password` (plus the same pepper used to hash)
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        argon2::PasswordHash::new(&self.0).is_ok_and(|parsed| {
            Argon2::default()
                .verify_password(&password.with_pepper(pepper), &parsed)
                .is_ok()
        })
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashedPassword(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clear(raw: &str) -> ClearTextPassword {
        ClearTextPassword::new(raw.to_string()).unwrap()
    }

    #[test]
    fn test_only_empty_is_refused() {
        assert_eq!(
            ClearTextPassword::new(String::new()).unwrap_err(),
            PasswordPolicyError::Empty
        );
        assert!(ClearTextPassword::new("p1".to_string()).is_ok());
        assert!(ClearTextPassword::new(" ".to_string()).is_ok());
    }

    #[test]
    fn test_verify_matches_only_the_original() {
        let hashed = clear("admin123").hash(None).unwrap();

        assert!(hashed.as_phc_string().starts_with("$argon2id$"));
        assert!(hashed.verify(&clear("admin123"), None));
        assert!(!hashed.verify(&clear("Admin123"), None));
    }

    #[test]
    fn test_each_hash_gets_its_own_salt() {
        let password = clear("securepass");
        let a = password.hash(None).unwrap();
        let b = password.hash(None).unwrap();

        assert_ne!(a, b);
        assert!(a.verify(&password, None) && b.verify(&password, None));
    }

    #[test]
    fn test_pepper_must_match() {
        let password = clear("custpass");
        let hashed = password.hash(Some(b"pepper-a")).unwrap();

        assert!(hashed.verify(&password, Some(b"pepper-a")));
        assert!(!hashed.verify(&password, Some(b"pepper-b")));
        assert!(!hashed.verify(&password, None));
    }

    #[test]
    fn test_stored_hash_is_validated() {
        let stored = clear("newpass456").hash(None).unwrap();
        let loaded = HashedPassword::from_phc_string(stored.as_phc_string()).unwrap();
        assert!(loaded.verify(&clear("newpass456"), None));

        assert!(matches!(
            HashedPassword::from_phc_string("plaintext"),
            Err(PasswordHashError::InvalidHashFormat)
        ));
    }

    #[test]
    fn test_debug_hides_secrets() {
        assert_eq!(format!("{:?}", clear("hunter2")), "ClearTextPassword(***)");
        let hashed = clear("hunter2").hash(None).unwrap();
        assert!(!format!("{hashed:?}").contains("argon2"));
    }
}
