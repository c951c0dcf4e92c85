//! Application Layer
//!
//! Use cases and application services.

pub mod bootstrap;
pub mod check_session;
pub mod config;
pub mod dashboard;
pub mod manage_admins;
pub mod manage_customers;
pub mod sign_in;
pub mod sign_out;

mod input;

// Re-exports
pub use bootstrap::{DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_USERNAME, ensure_default_admin};
pub use check_session::CheckSessionUseCase;
pub use config::BankConfig;
pub use dashboard::{AdminDashboard, DashboardUseCase};
pub use manage_admins::{AdminAccountsUseCase, CreateAdminInput, UpdateAdminInput};
pub use manage_customers::{CreateCustomerInput, CustomerAccountsUseCase, UpdateCustomerInput};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
