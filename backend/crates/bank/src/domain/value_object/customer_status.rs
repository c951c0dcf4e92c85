//! Customer Status
//!
//! An open string. Only `"active"` has meaning: it is the one status that
//! may sign in. Any other value (e.g. `"inactive"`, `"frozen"`) is stored
//! as-is and simply blocks authentication.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const ACTIVE: &str = "active";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerStatus(String);

impl CustomerStatus {
    pub fn active() -> Self {
        Self(ACTIVE.to_string())
    }

    /// Build from form input; blank input yields `None`
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        raw.map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| Self(s.to_string()))
    }

    pub fn from_db(raw: String) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.0 == ACTIVE
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CustomerStatus {
    fn default() -> Self {
        Self::active()
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_active() {
        assert!(CustomerStatus::default().is_active());
    }

    #[test]
    fn test_parse() {
        assert_eq!(CustomerStatus::parse(None), None);
        assert_eq!(CustomerStatus::parse(Some("   ")), None);
        let frozen = CustomerStatus::parse(Some(" frozen ")).unwrap();
        assert_eq!(frozen.as_str(), "frozen");
        assert!(!frozen.is_active());
    }

    #[test]
    fn test_status_is_case_sensitive() {
        assert!(!CustomerStatus::from_db("Active".to_string()).is_active());
    }
}
