//! Value Object Module

pub mod account_number;
pub mod customer_status;
pub mod password;
pub mod role;

pub use kernel::id::{AdminId, CustomerId};
