//! Customer Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    CustomerId, account_number::BankAccountNumber, customer_status::CustomerStatus,
    password::PasswordHash,
};

/// Customer account as stored
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: CustomerId,
    pub full_name: String,
    /// Unique, used as the login identifier
    pub email: String,
    pub password_hash: PasswordHash,
    pub bank_account_number: BankAccountNumber,
    /// Open string, e.g. "savings" or "checking"
    pub account_type: String,
    pub balance: f64,
    /// Set once at creation
    pub date_opened: DateTime<Utc>,
    pub status: CustomerStatus,
}

impl Customer {
    /// Only active customers may sign in
    #[inline]
    pub fn can_login(&self) -> bool {
        self.status.is_active()
    }
}

/// Customer about to be inserted; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub full_name: String,
    pub email: String,
    pub password_hash: PasswordHash,
    pub bank_account_number: BankAccountNumber,
    pub account_type: String,
    pub balance: f64,
    pub date_opened: DateTime<Utc>,
    pub status: CustomerStatus,
}

impl NewCustomer {
    pub fn into_customer(self, id: CustomerId) -> Customer {
        Customer {
            id,
            full_name: self.full_name,
            email: self.email,
            password_hash: self.password_hash,
            bank_account_number: self.bank_account_number,
            account_type: self.account_type,
            balance: self.balance,
            date_opened: self.date_opened,
            status: self.status,
        }
    }
}
