//! Customer Accounts Use Case
//!
//! Create, edit and delete customer records on behalf of an administrator.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::BankConfig;
use crate::application::input::{non_blank, required};
use crate::domain::entity::customer::{Customer, NewCustomer};
use crate::domain::repository::{AuthSessionRepository, CustomerRepository};
use crate::domain::value_object::{
    CustomerId,
    account_number::BankAccountNumber,
    customer_status::CustomerStatus,
    password::{PasswordHash, RawPassword},
    role::Role,
};
use crate::error::{BankError, BankResult};

const ENTITY: &str = "Customer";

pub struct CreateCustomerInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub account_type: String,
    /// Absent means 0.0
    pub balance: Option<f64>,
    /// Absent or blank means "active"
    pub status: Option<String>,
}

pub struct UpdateCustomerInput {
    pub full_name: String,
    pub email: String,
    pub account_type: String,
    /// Absent means 0.0
    pub balance: Option<f64>,
    /// Absent or blank keeps the current status
    pub status: Option<String>,
    /// Empty or absent keeps the current password
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

pub struct CustomerAccountsUseCase<C, S>
where
    C: CustomerRepository,
    S: AuthSessionRepository,
{
    customer_repo: Arc<C>,
    session_repo: Arc<S>,
    config: Arc<BankConfig>,
}

impl<C, S> CustomerAccountsUseCase<C, S>
where
    C: CustomerRepository,
    S: AuthSessionRepository,
{
    pub fn new(customer_repo: Arc<C>, session_repo: Arc<S>, config: Arc<BankConfig>) -> Self {
        Self {
            customer_repo,
            session_repo,
            config,
        }
    }

    pub async fn list(&self) -> BankResult<Vec<Customer>> {
        self.customer_repo.list().await
    }

    pub async fn get(&self, id: CustomerId) -> BankResult<Customer> {
        self.customer_repo
            .find_by_id(id)
            .await?
            .ok_or(BankError::NotFound(ENTITY))
    }

    pub async fn create(&self, input: CreateCustomerInput) -> BankResult<Customer> {
        let full_name = required(&input.full_name, "Full name")?;
        let email = required(&input.email, "Email")?;
        if input.password.is_empty() {
            return Err(BankError::MissingField("Password"));
        }
        let account_type = required(&input.account_type, "Account type")?;

        if input.password != input.confirm_password {
            return Err(BankError::PasswordMismatch);
        }
        if self.customer_repo.find_by_email(&email).await?.is_some() {
            return Err(BankError::DuplicateEmail);
        }

        let raw_password = RawPassword::new(input.password)?;
        let new_customer = NewCustomer {
            full_name,
            email,
            password_hash: PasswordHash::from_raw(&raw_password, self.config.pepper())?,
            bank_account_number: BankAccountNumber::generate(),
            account_type,
            balance: input.balance.unwrap_or(0.0),
            date_opened: Utc::now(),
            status: CustomerStatus::parse(input.status.as_deref()).unwrap_or_default(),
        };
        let id = self.customer_repo.create(&new_customer).await?;

        tracing::info!(
            customer_id = %id,
            account_number = %new_customer.bank_account_number,
            "Customer created"
        );
        Ok(new_customer.into_customer(id))
    }

    pub async fn update(&self, id: CustomerId, input: UpdateCustomerInput) -> BankResult<Customer> {
        let mut customer = self.get(id).await?;

        let full_name = required(&input.full_name, "Full name")?;
        let email = required(&input.email, "Email")?;
        let account_type = required(&input.account_type, "Account type")?;

        let new_password = non_blank(input.password);
        if let Some(password) = &new_password {
            if input.confirm_password.as_deref() != Some(password.as_str()) {
                return Err(BankError::PasswordMismatch);
            }
        }

        if let Some(existing) = self.customer_repo.find_by_email(&email).await? {
            if existing.id != id {
                return Err(BankError::DuplicateEmail);
            }
        }

        customer.full_name = full_name;
        customer.email = email;
        customer.account_type = account_type;
        customer.balance = input.balance.unwrap_or(0.0);
        if let Some(status) = CustomerStatus::parse(input.status.as_deref()) {
            customer.status = status;
        }
        if let Some(raw_password) = RawPassword::optional(new_password) {
            customer.password_hash = PasswordHash::from_raw(&raw_password, self.config.pepper())?;
        }

        self.customer_repo.update(&customer).await?;

        tracing::info!(customer_id = %id, status = %customer.status, "Customer updated");
        Ok(customer)
    }

    /// Physical delete; the customer's sessions go with it
    pub async fn delete(&self, id: CustomerId) -> BankResult<()> {
        if !self.customer_repo.delete(id).await? {
            return Err(BankError::NotFound(ENTITY));
        }
        let revoked = self
            .session_repo
            .delete_all_for_principal(Role::Customer, id.as_i64())
            .await?;

        tracing::info!(customer_id = %id, revoked, "Customer deleted");
        Ok(())
    }
}
