//! Sign Out Use Case
//!
//! Invalidates a session. Signing out without a valid session is a no-op.

use std::sync::Arc;

use crate::application::config::BankConfig;
use crate::domain::repository::AuthSessionRepository;
use crate::error::BankResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: AuthSessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<BankConfig>,
}

impl<S> SignOutUseCase<S>
where
    S: AuthSessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<BankConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, session_token: Option<&str>) -> BankResult<()> {
        let Some(session_id) = session_token.and_then(|t| self.config.parse_session_token(t))
        else {
            return Ok(());
        };

        self.session_repo.delete(session_id).await?;

        tracing::info!(session_id = %session_id, "Signed out");
        Ok(())
    }
}
