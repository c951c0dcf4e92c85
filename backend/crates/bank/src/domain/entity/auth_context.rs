//! Auth Context
//!
//! Who is making the current request. Resolved once per request from the
//! session cookie and handed to handlers as a plain value; role checks are
//! ordinary method calls on it.

use serde::Serialize;

use crate::domain::value_object::role::Role;
use crate::error::{BankError, BankResult};

/// Authenticated principal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: i64,
    pub display_name: String,
    pub role: Role,
}

impl Identity {
    pub fn admin(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            display_name: username.into(),
            role: Role::Admin,
        }
    }

    pub fn customer(id: i64, full_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: full_name.into(),
            role: Role::Customer,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    identity: Option<Identity>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        Self { identity: None }
    }

    pub fn authenticated(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn require_session(&self) -> BankResult<&Identity> {
        self.identity.as_ref().ok_or(BankError::NotAuthenticated)
    }

    /// `NotAuthenticated` wins over `Forbidden` for anonymous callers
    pub fn require_role(&self, role: Role) -> BankResult<&Identity> {
        let identity = self.require_session()?;
        if identity.role != role {
            return Err(BankError::Forbidden);
        }
        Ok(identity)
    }

    pub fn require_admin(&self) -> BankResult<&Identity> {
        self.require_role(Role::Admin)
    }

    pub fn require_customer(&self) -> BankResult<&Identity> {
        self.require_role(Role::Customer)
    }
}
