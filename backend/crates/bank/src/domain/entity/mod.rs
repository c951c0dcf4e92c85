pub mod admin;
pub mod auth_context;
pub mod auth_session;
pub mod customer;
