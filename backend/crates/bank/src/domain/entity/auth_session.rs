//! Auth Session Entity
//!
//! Server-side record behind the session cookie. The cookie itself only
//! carries the signed session id.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::entity::auth_context::Identity;
use crate::domain::value_object::role::Role;
use crate::error::{BankError, BankResult};

#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Session ID (UUID v4)
    pub session_id: Uuid,
    /// Row id in `admins` or `customers`, depending on `role`
    pub principal_id: i64,
    /// Username for administrators, full name for customers
    pub display_name: String,
    pub role: Role,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    pub created_at: DateTime<Utc>,
}

impl AuthSession {
    /// TTL comes from config; sessions are never extended.
    pub fn new(identity: &Identity, ttl: Duration) -> BankResult<Self> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| BankError::Internal(format!("session TTL {ttl} overflows the clock")))?;

        Ok(Self {
            session_id: Uuid::new_v4(),
            principal_id: identity.id,
            display_name: identity.display_name.clone(),
            role: identity.role,
            expires_at_ms: expires_at.timestamp_millis(),
            created_at: now,
        })
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    pub fn identity(&self) -> Identity {
        Identity {
            id: self.principal_id,
            display_name: self.display_name.clone(),
            role: self.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            id: 3,
            display_name: "Jane Doe".to_string(),
            role: Role::Customer,
        }
    }

    #[test]
    fn test_new_session_carries_identity() {
        let session = AuthSession::new(&identity(), Duration::hours(1)).unwrap();
        assert!(!session.is_expired());
        assert_eq!(session.identity(), identity());
        assert_eq!(session.session_id.get_version_num(), 4);
    }

    #[test]
    fn test_negative_ttl_is_expired() {
        let session = AuthSession::new(&identity(), Duration::seconds(-1)).unwrap();
        assert!(session.is_expired());
    }

    #[test]
    fn test_overflowing_ttl_is_an_error() {
        let result = AuthSession::new(&identity(), Duration::MAX);
        assert!(matches!(result, Err(BankError::Internal(_))));
    }
}
