//! Password Value Objects
//!
//! Thin domain wrappers over `platform::password`. A blank password is a
//! missing field, nothing more; no strength rules apply.

use platform::password::{ClearTextPassword, HashedPassword};

use crate::error::{BankError, BankResult};

/// Clear-text password received from a form (zeroized on drop)
#[derive(Debug)]
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    pub fn new(raw: String) -> BankResult<Self> {
        ClearTextPassword::new(raw)
            .map(Self)
            .map_err(|_| BankError::MissingField("Password"))
    }

    /// Treat empty input as "no new password"
    pub fn optional(raw: Option<String>) -> Option<Self> {
        raw.and_then(|r| ClearTextPassword::new(r).ok()).map(Self)
    }
}

/// Stored password hash (Argon2id PHC string)
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(HashedPassword);

impl PasswordHash {
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> BankResult<Self> {
        Ok(Self(raw.0.hash(pepper)?))
    }

    pub fn from_db(phc: String) -> BankResult<Self> {
        Ok(Self(HashedPassword::from_phc_string(phc)?))
    }

    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(&raw.0, pepper)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_phc_string()
    }
}

impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordHash([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_is_missing() {
        assert!(matches!(
            RawPassword::new(String::new()),
            Err(BankError::MissingField("Password"))
        ));
        assert!(RawPassword::optional(Some(String::new())).is_none());
        assert!(RawPassword::optional(None).is_none());
    }

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("p1".to_string()).unwrap();
        let hash = PasswordHash::from_raw(&raw, None).unwrap();
        assert!(hash.verify(&raw, None));
        assert!(!hash.verify(&RawPassword::new("p2".to_string()).unwrap(), None));

        let restored = PasswordHash::from_db(hash.as_str().to_string()).unwrap();
        assert!(restored.verify(&raw, None));
    }

    #[test]
    fn test_rejects_non_phc() {
        assert!(PasswordHash::from_db("plaintext".to_string()).is_err());
    }
}
