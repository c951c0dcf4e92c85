//! Bank Account Number
//!
//! `"ACC"` followed by five random digits. Uniqueness is enforced by the
//! store, not checked before insert.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

const PREFIX: &str = "ACC";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BankAccountNumber(String);

impl BankAccountNumber {
    pub fn generate() -> Self {
        let digits: u32 = rand::rng().random_range(10_000..=99_999);
        Self(format!("{PREFIX}{digits}"))
    }

    pub fn from_db(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BankAccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
