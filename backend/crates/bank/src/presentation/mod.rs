//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::BankAppState;
pub use middleware::resolve_auth_context;
pub use router::bank_router;
