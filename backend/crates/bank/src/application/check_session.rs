//! Check Session Use Case
//!
//! Turns a session cookie value into the request's `AuthContext`.

use std::sync::Arc;

use crate::application::config::BankConfig;
use crate::domain::entity::{auth_context::AuthContext, auth_session::AuthSession};
use crate::domain::repository::AuthSessionRepository;
use crate::error::BankResult;

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: AuthSessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<BankConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: AuthSessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<BankConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Resolve a cookie value into an auth context
    ///
    /// A missing, forged, unknown or expired token yields an anonymous
    /// context. Only store failures are errors.
    pub async fn resolve(&self, session_token: Option<&str>) -> BankResult<AuthContext> {
        let Some(token) = session_token else {
            return Ok(AuthContext::anonymous());
        };

        Ok(match self.get_session(token).await? {
            Some(session) => AuthContext::authenticated(session.identity()),
            None => AuthContext::anonymous(),
        })
    }

    /// Look up a live session; expired sessions are deleted on access
    pub async fn get_session(&self, session_token: &str) -> BankResult<Option<AuthSession>> {
        let Some(session_id) = self.config.parse_session_token(session_token) else {
            tracing::debug!("Rejected session token with bad signature");
            return Ok(None);
        };

        let Some(session) = self.session_repo.find_by_id(session_id).await? else {
            return Ok(None);
        };

        if session.is_expired() {
            self.session_repo.delete(session_id).await?;
            tracing::debug!(session_id = %session_id, "Expired session removed");
            return Ok(None);
        }

        Ok(Some(session))
    }
}
