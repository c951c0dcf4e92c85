//! Sign In Use Case
//!
//! Resolves an identifier and password to an identity and opens a session.
//! Administrators are looked up by username first; only if that fails is
//! the identifier tried as a customer email.

use std::sync::Arc;

use crate::application::config::BankConfig;
use crate::domain::entity::{auth_context::Identity, auth_session::AuthSession};
use crate::domain::repository::{AdminRepository, AuthSessionRepository, CustomerRepository};
use crate::domain::value_object::password::RawPassword;
use crate::error::{BankError, BankResult};

/// Sign in input
pub struct SignInInput {
    /// Administrator username or customer email
    pub identifier: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Signed session token for the cookie
    pub session_token: String,
    pub identity: Identity,
    pub expires_at_ms: i64,
}

/// Sign in use case
pub struct SignInUseCase<A, C, S>
where
    A: AdminRepository,
    C: CustomerRepository,
    S: AuthSessionRepository,
{
    admin_repo: Arc<A>,
    customer_repo: Arc<C>,
    session_repo: Arc<S>,
    config: Arc<BankConfig>,
}

impl<A, C, S> SignInUseCase<A, C, S>
where
    A: AdminRepository,
    C: CustomerRepository,
    S: AuthSessionRepository,
{
    pub fn new(
        admin_repo: Arc<A>,
        customer_repo: Arc<C>,
        session_repo: Arc<S>,
        config: Arc<BankConfig>,
    ) -> Self {
        Self {
            admin_repo,
            customer_repo,
            session_repo,
            config,
        }
    }

    /// Check credentials without opening a session
    ///
    /// Unknown identifier, wrong password and inactive customer all yield
    /// the same `InvalidCredentials`.
    pub async fn authenticate(&self, identifier: &str, password: String) -> BankResult<Identity> {
        let raw_password = RawPassword::new(password).map_err(|_| BankError::InvalidCredentials)?;
        let pepper = self.config.pepper();

        if let Some(admin) = self.admin_repo.find_by_username(identifier).await? {
            if admin.password_hash.verify(&raw_password, pepper) {
                return Ok(Identity::admin(admin.id.as_i64(), admin.username));
            }
        }

        if let Some(customer) = self.customer_repo.find_by_email(identifier).await? {
            if customer.can_login() && customer.password_hash.verify(&raw_password, pepper) {
                return Ok(Identity::customer(customer.id.as_i64(), customer.full_name));
            }
        }

        Err(BankError::InvalidCredentials)
    }

    pub async fn execute(&self, input: SignInInput) -> BankResult<SignInOutput> {
        let identity = self.authenticate(&input.identifier, input.password).await?;

        let session = AuthSession::new(&identity, self.config.session_ttl_chrono()?)?;
        self.session_repo.create(&session).await?;

        let session_token = self.config.sign_session_id(session.session_id);

        tracing::info!(
            principal_id = identity.id,
            role = %identity.role,
            session_id = %session.session_id,
            "Signed in"
        );

        Ok(SignInOutput {
            session_token,
            identity,
            expires_at_ms: session.expires_at_ms,
        })
    }
}
