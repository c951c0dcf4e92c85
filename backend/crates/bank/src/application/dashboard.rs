//! Dashboard Use Case
//!
//! Read-only views behind `/dashboard`.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::entity::{auth_context::Identity, customer::Customer};
use crate::domain::repository::{AdminRepository, CustomerRepository};
use crate::domain::value_object::{CustomerId, customer_status};
use crate::error::{BankError, BankResult};

/// Counts shown on the administrator dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub admin_count: i64,
    pub customer_count: i64,
    pub active_customers: i64,
}

pub struct DashboardUseCase<A, C>
where
    A: AdminRepository,
    C: CustomerRepository,
{
    admin_repo: Arc<A>,
    customer_repo: Arc<C>,
}

impl<A, C> DashboardUseCase<A, C>
where
    A: AdminRepository,
    C: CustomerRepository,
{
    pub fn new(admin_repo: Arc<A>, customer_repo: Arc<C>) -> Self {
        Self {
            admin_repo,
            customer_repo,
        }
    }

    pub async fn admin_dashboard(&self) -> BankResult<AdminDashboard> {
        Ok(AdminDashboard {
            admin_count: self.admin_repo.count().await?,
            customer_count: self.customer_repo.count().await?,
            active_customers: self
                .customer_repo
                .count_by_status(customer_status::ACTIVE)
                .await?,
        })
    }

    /// The signed-in customer's own record
    pub async fn customer_dashboard(&self, identity: &Identity) -> BankResult<Customer> {
        self.customer_repo
            .find_by_id(CustomerId::from_i64(identity.id))
            .await?
            .ok_or(BankError::NotFound("Customer"))
    }
}
