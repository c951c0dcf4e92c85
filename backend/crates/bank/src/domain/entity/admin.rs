//! Administrator Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{AdminId, password::PasswordHash};

/// Administrator account as stored
#[derive(Debug, Clone)]
pub struct Admin {
    pub id: AdminId,
    /// Unique, used as the login identifier
    pub username: String,
    /// Unique
    pub email: String,
    pub password_hash: PasswordHash,
    /// Set once at creation
    pub created_at: DateTime<Utc>,
}

/// Administrator about to be inserted; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub username: String,
    pub email: String,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

impl NewAdmin {
    pub fn new(username: String, email: String, password_hash: PasswordHash) -> Self {
        Self {
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }

    pub fn into_admin(self, id: AdminId) -> Admin {
        Admin {
            id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            created_at: self.created_at,
        }
    }
}
