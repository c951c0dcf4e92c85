//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use uuid::Uuid;

use crate::domain::entity::{
    admin::{Admin, NewAdmin},
    auth_session::AuthSession,
    customer::{Customer, NewCustomer},
};
use crate::domain::value_object::{AdminId, CustomerId, role::Role};
use crate::error::BankResult;

/// Administrator repository trait
#[trait_variant::make(AdminRepository: Send)]
pub trait LocalAdminRepository {
    /// Insert and return the assigned id
    ///
    /// Fails with `DuplicateUsername` / `DuplicateEmail` when a UNIQUE
    /// constraint rejects the row.
    async fn create(&self, admin: &NewAdmin) -> BankResult<AdminId>;

    async fn find_by_id(&self, id: AdminId) -> BankResult<Option<Admin>>;

    async fn find_by_username(&self, username: &str) -> BankResult<Option<Admin>>;

    async fn find_by_email(&self, email: &str) -> BankResult<Option<Admin>>;

    /// All administrators ordered by id
    async fn list(&self) -> BankResult<Vec<Admin>>;

    async fn count(&self) -> BankResult<i64>;

    /// Replace username, email and password hash
    async fn update(&self, admin: &Admin) -> BankResult<()>;

    /// Returns whether a row was deleted
    async fn delete(&self, id: AdminId) -> BankResult<bool>;
}

/// Customer repository trait
#[trait_variant::make(CustomerRepository: Send)]
pub trait LocalCustomerRepository {
    /// Insert and return the assigned id
    ///
    /// Fails with `DuplicateEmail` or `AccountNumberTaken` on UNIQUE
    /// violations.
    async fn create(&self, customer: &NewCustomer) -> BankResult<CustomerId>;

    async fn find_by_id(&self, id: CustomerId) -> BankResult<Option<Customer>>;

    async fn find_by_email(&self, email: &str) -> BankResult<Option<Customer>>;

    /// All customers ordered by id
    async fn list(&self) -> BankResult<Vec<Customer>>;

    async fn count(&self) -> BankResult<i64>;

    async fn count_by_status(&self, status: &str) -> BankResult<i64>;

    /// Full replace of every mutable column
    async fn update(&self, customer: &Customer) -> BankResult<()>;

    /// Returns whether a row was deleted
    async fn delete(&self, id: CustomerId) -> BankResult<bool>;
}

/// Auth session repository trait
#[trait_variant::make(AuthSessionRepository: Send)]
pub trait LocalAuthSessionRepository {
    async fn create(&self, session: &AuthSession) -> BankResult<()>;

    async fn find_by_id(&self, session_id: Uuid) -> BankResult<Option<AuthSession>>;

    async fn delete(&self, session_id: Uuid) -> BankResult<()>;

    /// Delete every session of one principal
    async fn delete_all_for_principal(&self, role: Role, principal_id: i64) -> BankResult<u64>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> BankResult<u64>;
}

/// Everything the HTTP layer needs from one store handle
pub trait BankStore:
    AdminRepository + CustomerRepository + AuthSessionRepository + Clone + Send + Sync + 'static
{
}

impl<T> BankStore for T where
    T: AdminRepository
        + CustomerRepository
        + AuthSessionRepository
        + Clone
        + Send
        + Sync
        + 'static
{
}
