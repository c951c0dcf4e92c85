//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::AdminDashboard;
use crate::domain::entity::{admin::Admin, auth_context::Identity, customer::Customer};
use crate::domain::value_object::role::Role;

// ============================================================================
// Auth
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignInRequest {
    /// Administrator username or customer email
    #[serde(alias = "username")]
    pub identifier: String,
    pub password: String,
}

/// Sign in response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    #[serde(flatten)]
    pub identity: Identity,
    pub expires_at_ms: i64,
}

/// Session status response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub id: Option<i64>,
    pub display_name: Option<String>,
    pub role: Option<Role>,
}

impl From<Option<&Identity>> for SessionStatusResponse {
    fn from(identity: Option<&Identity>) -> Self {
        Self {
            authenticated: identity.is_some(),
            id: identity.map(|i| i.id),
            display_name: identity.map(|i| i.display_name.clone()),
            role: identity.map(|i| i.role),
        }
    }
}

// ============================================================================
// Administrators
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateAdminRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateAdminRequest {
    pub username: String,
    pub email: String,
    /// Leave empty to keep the current password
    pub password: Option<String>,
}

/// Administrator as shown to other administrators (no hash)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Admin> for AdminResponse {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id.as_i64(),
            username: admin.username.clone(),
            email: admin.email.clone(),
            created_at: admin.created_at,
        }
    }
}

// ============================================================================
// Customers
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCustomerRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub account_type: String,
    pub balance: Option<f64>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateCustomerRequest {
    pub full_name: String,
    pub email: String,
    pub account_type: String,
    pub balance: Option<f64>,
    pub status: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub bank_account_number: String,
    pub account_type: String,
    pub balance: f64,
    pub date_opened: DateTime<Utc>,
    pub status: String,
}

impl From<&Customer> for CustomerResponse {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id.as_i64(),
            full_name: customer.full_name.clone(),
            email: customer.email.clone(),
            bank_account_number: customer.bank_account_number.to_string(),
            account_type: customer.account_type.clone(),
            balance: customer.balance,
            date_opened: customer.date_opened,
            status: customer.status.to_string(),
        }
    }
}

// ============================================================================
// Dashboard
// ============================================================================

/// `/dashboard` answer, tagged with the caller's role
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum DashboardResponse {
    Admin(AdminDashboard),
    Customer(CustomerResponse),
}
