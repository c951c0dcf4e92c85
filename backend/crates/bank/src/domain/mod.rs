//! Domain Layer
//!
//! Account entities, value objects, the per-request auth context and the
//! repository traits the store implements.

pub mod entity;
pub mod repository;
pub mod value_object;

pub use entity::{admin::Admin, auth_session::AuthSession, customer::Customer};
pub use repository::{AdminRepository, AuthSessionRepository, BankStore, CustomerRepository};
