//! Administrator Accounts Use Case
//!
//! Create, edit and delete administrator records. Callers are expected to
//! have passed the admin role gate already.

use std::sync::Arc;

use crate::application::config::BankConfig;
use crate::application::input::{non_blank, required};
use crate::domain::entity::{
    admin::{Admin, NewAdmin},
    auth_context::Identity,
};
use crate::domain::repository::{AdminRepository, AuthSessionRepository};
use crate::domain::value_object::{
    AdminId,
    password::{PasswordHash, RawPassword},
    role::Role,
};
use crate::error::{BankError, BankResult};

const ENTITY: &str = "Administrator";

pub struct CreateAdminInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub struct UpdateAdminInput {
    pub username: String,
    pub email: String,
    /// Empty or absent keeps the current password
    pub password: Option<String>,
}

pub struct AdminAccountsUseCase<A, S>
where
    A: AdminRepository,
    S: AuthSessionRepository,
{
    admin_repo: Arc<A>,
    session_repo: Arc<S>,
    config: Arc<BankConfig>,
}

impl<A, S> AdminAccountsUseCase<A, S>
where
    A: AdminRepository,
    S: AuthSessionRepository,
{
    pub fn new(admin_repo: Arc<A>, session_repo: Arc<S>, config: Arc<BankConfig>) -> Self {
        Self {
            admin_repo,
            session_repo,
            config,
        }
    }

    pub async fn list(&self) -> BankResult<Vec<Admin>> {
        self.admin_repo.list().await
    }

    pub async fn get(&self, id: AdminId) -> BankResult<Admin> {
        self.admin_repo
            .find_by_id(id)
            .await?
            .ok_or(BankError::NotFound(ENTITY))
    }

    pub async fn create(&self, input: CreateAdminInput) -> BankResult<Admin> {
        let username = required(&input.username, "Username")?;
        let email = required(&input.email, "Email")?;
        if input.password.is_empty() {
            return Err(BankError::MissingField("Password"));
        }
        if input.password != input.confirm_password {
            return Err(BankError::PasswordMismatch);
        }
        let raw_password = RawPassword::new(input.password)?;
        if self.admin_repo.find_by_username(&username).await?.is_some() {
            return Err(BankError::DuplicateUsername);
        }
        if self.admin_repo.find_by_email(&email).await?.is_some() {
            return Err(BankError::DuplicateEmail);
        }

        let password_hash = PasswordHash::from_raw(&raw_password, self.config.pepper())?;
        let new_admin = NewAdmin::new(username, email, password_hash);
        let id = self.admin_repo.create(&new_admin).await?;

        tracing::info!(admin_id = %id, username = %new_admin.username, "Administrator created");
        Ok(new_admin.into_admin(id))
    }

    pub async fn update(&self, id: AdminId, input: UpdateAdminInput) -> BankResult<Admin> {
        let mut admin = self.get(id).await?;

        let username = required(&input.username, "Username")?;
        let email = required(&input.email, "Email")?;

        if let Some(existing) = self.admin_repo.find_by_username(&username).await? {
            if existing.id != id {
                return Err(BankError::DuplicateUsername);
            }
        }
        if let Some(existing) = self.admin_repo.find_by_email(&email).await? {
            if existing.id != id {
                return Err(BankError::DuplicateEmail);
            }
        }

        admin.username = username;
        admin.email = email;
        if let Some(raw_password) = RawPassword::optional(non_blank(input.password)) {
            admin.password_hash = PasswordHash::from_raw(&raw_password, self.config.pepper())?;
        }

        self.admin_repo.update(&admin).await?;

        tracing::info!(admin_id = %id, "Administrator updated");
        Ok(admin)
    }

    /// Delete another administrator and revoke its sessions
    pub async fn delete(&self, id: AdminId, acting: &Identity) -> BankResult<()> {
        self.get(id).await?;

        if acting.role == Role::Admin && acting.id == id.as_i64() {
            return Err(BankError::SelfDeletion);
        }

        if !self.admin_repo.delete(id).await? {
            return Err(BankError::NotFound(ENTITY));
        }
        let revoked = self
            .session_repo
            .delete_all_for_principal(Role::Admin, id.as_i64())
            .await?;

        tracing::info!(admin_id = %id, acting_admin = acting.id, revoked, "Administrator deleted");
        Ok(())
    }
}
