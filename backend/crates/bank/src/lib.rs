//! Bank Administration Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Accounts, sessions, auth context, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - SQLite implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Sign in as administrator (by username) or customer (by email)
//! - Server-side sessions referenced by a signed cookie
//! - Administrator-only management of administrators and customers
//! - Customer self-service dashboard
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - Session cookie is `<session uuid>.<HMAC-SHA256>`; the session row is
//!   the source of truth
//! - Inactive customers cannot sign in; deleted accounts lose their sessions

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::BankConfig;
pub use application::ensure_default_admin;
pub use error::{BankError, BankResult};
pub use infra::sqlite::SqliteBankRepository;
pub use presentation::router::bank_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
