use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Role of an authenticated principal
///
/// There is no guest role: an unauthenticated request simply has no identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[display("admin")]
    Admin,
    #[display("customer")]
    Customer,
}

impl Role {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Customer => "customer",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "admin" => Some(Role::Admin),
            "customer" => Some(Role::Customer),
            _ => None,
        }
    }
}
