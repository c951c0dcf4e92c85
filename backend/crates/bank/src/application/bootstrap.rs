//! Startup bootstrap
//!
//! Makes sure a first administrator exists so the system can be entered at
//! all. Safe to run on every start.

use crate::domain::entity::admin::NewAdmin;
use crate::domain::repository::AdminRepository;
use crate::domain::value_object::password::{PasswordHash, RawPassword};
use crate::error::BankResult;

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Create the default administrator unless one with its email exists
///
/// Returns whether an account was created.
pub async fn ensure_default_admin<A>(admin_repo: &A, pepper: Option<&[u8]>) -> BankResult<bool>
where
    A: AdminRepository,
{
    if admin_repo.find_by_email(DEFAULT_ADMIN_EMAIL).await?.is_some() {
        tracing::debug!("Default administrator already present");
        return Ok(false);
    }

    let raw_password = RawPassword::new(DEFAULT_ADMIN_PASSWORD.to_string())?;
    let admin = NewAdmin::new(
        DEFAULT_ADMIN_USERNAME.to_string(),
        DEFAULT_ADMIN_EMAIL.to_string(),
        PasswordHash::from_raw(&raw_password, pepper)?,
    );
    let id = admin_repo.create(&admin).await?;

    tracing::warn!(
        admin_id = %id,
        username = DEFAULT_ADMIN_USERNAME,
        "Default administrator created; change its password"
    );
    Ok(true)
}
