//! Application Configuration
//!
//! Configuration for the bank application layer.

use std::time::Duration;

use platform::cookie::SessionCookie;
use uuid::Uuid;

use crate::error::{BankError, BankResult};

pub use platform::cookie::SameSite;

/// Bank application configuration
#[derive(Debug, Clone)]
pub struct BankConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing
    pub session_secret: Vec<u8>,
    /// Lifetime of a session; sessions are not extended on activity
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "bank_session".to_string(),
            session_secret: vec![0u8; 32],
            session_ttl: Duration::from_secs(12 * 3600), // 12 hours
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            password_pepper: None,
        }
    }
}

impl BankConfig {
    /// Longest session lifetime accepted from the environment
    pub const MAX_SESSION_TTL: Duration = Duration::from_secs(365 * 24 * 3600);

    /// Create config with a random session secret
    ///
    /// Sessions issued with a random secret do not survive a restart.
    pub fn with_random_secret() -> Self {
        Self {
            session_secret: platform::crypto::random_secret().to_vec(),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    pub fn session_ttl_chrono(&self) -> BankResult<chrono::Duration> {
        chrono::Duration::from_std(self.session_ttl).map_err(|_| {
            BankError::Internal(format!("session TTL {:?} is out of range", self.session_ttl))
        })
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    pub fn session_cookie(&self) -> SessionCookie {
        SessionCookie::new(self.session_cookie_name.as_str())
            .secure(self.cookie_secure)
            .same_site(self.cookie_same_site)
            .max_age(self.session_ttl)
    }

    /// Sign a session id into the cookie value
    pub fn sign_session_id(&self, session_id: Uuid) -> String {
        platform::crypto::sign_token(&self.session_secret, &session_id.to_string())
    }

    /// Verify a cookie value and recover the session id
    pub fn parse_session_token(&self, token: &str) -> Option<Uuid> {
        platform::crypto::verify_token(&self.session_secret, token)?
            .parse()
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BankConfig::default();
        assert_eq!(config.session_cookie_name, "bank_session");
        assert_eq!(config.session_ttl_chrono().unwrap(), chrono::Duration::hours(12));
        assert!(config.pepper().is_none());
    }

    #[test]
    fn test_development_is_insecure_with_random_secret() {
        let a = BankConfig::development();
        let b = BankConfig::development();
        assert!(!a.cookie_secure);
        assert_ne!(a.session_secret, b.session_secret);
    }

    #[test]
    fn test_unrepresentable_ttl_is_an_error() {
        let config = BankConfig {
            session_ttl: Duration::from_secs(u64::MAX),
            ..BankConfig::default()
        };
        assert!(matches!(config.session_ttl_chrono(), Err(BankError::Internal(_))));
    }

    #[test]
    fn test_session_token_round_trip() {
        let config = BankConfig::with_random_secret();
        let id = Uuid::new_v4();
        let token = config.sign_session_id(id);
        assert_eq!(config.parse_session_token(&token), Some(id));

        let other = BankConfig::with_random_secret();
        assert_eq!(other.parse_session_token(&token), None);
    }

    #[test]
    fn test_signed_garbage_is_rejected() {
        let config = BankConfig::with_random_secret();
        let token = platform::crypto::sign_token(&config.session_secret, "not-a-uuid");
        assert_eq!(config.parse_session_token(&token), None);
    }

    #[test]
    fn test_session_cookie() {
        let config = BankConfig::development();
        let cookie = config.session_cookie().issue("abc");
        assert!(cookie.starts_with("bank_session=abc"));
        assert!(cookie.contains("Max-Age=43200"));
        assert!(!cookie.contains("Secure"));
    }
}
