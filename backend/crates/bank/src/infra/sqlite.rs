//! SQLite Repository Implementations

use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

use crate::domain::entity::{
    admin::{Admin, NewAdmin},
    auth_session::AuthSession,
    customer::{Customer, NewCustomer},
};
use crate::domain::repository::{AdminRepository, AuthSessionRepository, CustomerRepository};
use crate::domain::value_object::{
    AdminId, CustomerId, account_number::BankAccountNumber, customer_status::CustomerStatus,
    password::PasswordHash, role::Role,
};
use crate::error::{BankError, BankResult};

/// SQLite-backed repository for accounts and sessions
#[derive(Clone)]
pub struct SqliteBankRepository {
    pool: SqlitePool,
}

impl SqliteBankRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (and create if missing) the database at `database_url`
    pub async fn connect(database_url: &str) -> BankResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5));
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(options)
            .await?;

        Ok(Self::new(pool))
    }

    /// Private in-memory database
    ///
    /// Every SQLite memory connection is its own database, so the pool is
    /// pinned to a single connection that never gets recycled.
    pub async fn in_memory() -> BankResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Ok(Self::new(pool))
    }

    /// Apply embedded schema migrations
    pub async fn migrate(&self) -> BankResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Clean up expired sessions
    pub async fn cleanup_expired(&self) -> BankResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM auth_sessions WHERE expires_at_ms < ?")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired auth sessions");

        Ok(deleted)
    }
}

/// Translate UNIQUE violations into the named duplicate errors
fn map_unique_violation(err: sqlx::Error) -> BankError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            let message = db_err.message();
            if message.contains("admins.username") {
                return BankError::DuplicateUsername;
            }
            if message.contains("admins.email") || message.contains("customers.email") {
                return BankError::DuplicateEmail;
            }
            if message.contains("customers.bank_account_number") {
                return BankError::AccountNumberTaken;
            }
        }
    }
    BankError::Database(err)
}

// ============================================================================
// Admin Repository Implementation
// ============================================================================

impl AdminRepository for SqliteBankRepository {
    async fn create(&self, admin: &NewAdmin) -> BankResult<AdminId> {
        let result = sqlx::query(
            r#"
            INSERT INTO admins (username, email, password_hash, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&admin.username)
        .bind(&admin.email)
        .bind(admin.password_hash.as_str())
        .bind(admin.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(AdminId::from_i64(result.last_insert_rowid()))
    }

    async fn find_by_id(&self, id: AdminId) -> BankResult<Option<Admin>> {
        let row = sqlx::query_as::<_, AdminRow>(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM admins
            WHERE id = ?
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(AdminRow::into_admin).transpose()
    }

    async fn find_by_username(&self, username: &str) -> BankResult<Option<Admin>> {
        let row = sqlx::query_as::<_, AdminRow>(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM admins
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(AdminRow::into_admin).transpose()
    }

    async fn find_by_email(&self, email: &str) -> BankResult<Option<Admin>> {
        let row = sqlx::query_as::<_, AdminRow>(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM admins
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(AdminRow::into_admin).transpose()
    }

    async fn list(&self) -> BankResult<Vec<Admin>> {
        sqlx::query_as::<_, AdminRow>(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM admins
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(AdminRow::into_admin)
        .collect()
    }

    async fn count(&self) -> BankResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admins")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn update(&self, admin: &Admin) -> BankResult<()> {
        sqlx::query(
            r#"
            UPDATE admins
            SET username = ?, email = ?, password_hash = ?
            WHERE id = ?
            "#,
        )
        .bind(&admin.username)
        .bind(&admin.email)
        .bind(admin.password_hash.as_str())
        .bind(admin.id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(())
    }

    async fn delete(&self, id: AdminId) -> BankResult<bool> {
        let deleted = sqlx::query("DELETE FROM admins WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Customer Repository Implementation
// ============================================================================

impl CustomerRepository for SqliteBankRepository {
    async fn create(&self, customer: &NewCustomer) -> BankResult<CustomerId> {
        let result = sqlx::query(
            r#"
            INSERT INTO customers (
                full_name,
                email,
                password_hash,
                bank_account_number,
                account_type,
                balance,
                date_opened,
                status
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&customer.full_name)
        .bind(&customer.email)
        .bind(customer.password_hash.as_str())
        .bind(customer.bank_account_number.as_str())
        .bind(&customer.account_type)
        .bind(customer.balance)
        .bind(customer.date_opened)
        .bind(customer.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(CustomerId::from_i64(result.last_insert_rowid()))
    }

    async fn find_by_id(&self, id: CustomerId) -> BankResult<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT
                id,
                full_name,
                email,
                password_hash,
                bank_account_number,
                account_type,
                balance,
                date_opened,
                status
            FROM customers
            WHERE id = ?
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(CustomerRow::into_customer).transpose()
    }

    async fn find_by_email(&self, email: &str) -> BankResult<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT
                id,
                full_name,
                email,
                password_hash,
                bank_account_number,
                account_type,
                balance,
                date_opened,
                status
            FROM customers
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(CustomerRow::into_customer).transpose()
    }

    async fn list(&self) -> BankResult<Vec<Customer>> {
        sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT
                id,
                full_name,
                email,
                password_hash,
                bank_account_number,
                account_type,
                balance,
                date_opened,
                status
            FROM customers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(CustomerRow::into_customer)
        .collect()
    }

    async fn count(&self) -> BankResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn count_by_status(&self, status: &str) -> BankResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers WHERE status = ?")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn update(&self, customer: &Customer) -> BankResult<()> {
        sqlx::query(
            r#"
            UPDATE customers
            SET
                full_name = ?,
                email = ?,
                password_hash = ?,
                account_type = ?,
                balance = ?,
                status = ?
            WHERE id = ?
            "#,
        )
        .bind(&customer.full_name)
        .bind(&customer.email)
        .bind(customer.password_hash.as_str())
        .bind(&customer.account_type)
        .bind(customer.balance)
        .bind(customer.status.as_str())
        .bind(customer.id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(())
    }

    async fn delete(&self, id: CustomerId) -> BankResult<bool> {
        let deleted = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Auth Session Repository Implementation
// ============================================================================

impl AuthSessionRepository for SqliteBankRepository {
    async fn create(&self, session: &AuthSession) -> BankResult<()> {
        sqlx::query(
            r#"
            INSERT INTO auth_sessions (
                session_id,
                principal_id,
                display_name,
                role,
                expires_at_ms,
                created_at
            ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(session.session_id.to_string())
        .bind(session.principal_id)
        .bind(&session.display_name)
        .bind(session.role.code())
        .bind(session.expires_at_ms)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> BankResult<Option<AuthSession>> {
        let row = sqlx::query_as::<_, AuthSessionRow>(
            r#"
            SELECT
                session_id,
                principal_id,
                display_name,
                role,
                expires_at_ms,
                created_at
            FROM auth_sessions
            WHERE session_id = ?
            "#,
        )
        .bind(session_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(AuthSessionRow::into_session).transpose()
    }

    async fn delete(&self, session_id: Uuid) -> BankResult<()> {
        sqlx::query("DELETE FROM auth_sessions WHERE session_id = ?")
            .bind(session_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_all_for_principal(&self, role: Role, principal_id: i64) -> BankResult<u64> {
        let deleted = sqlx::query("DELETE FROM auth_sessions WHERE role = ? AND principal_id = ?")
            .bind(role.code())
            .bind(principal_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }

    async fn cleanup_expired(&self) -> BankResult<u64> {
        self.cleanup_expired().await
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AdminRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl AdminRow {
    fn into_admin(self) -> BankResult<Admin> {
        Ok(Admin {
            id: AdminId::from_i64(self.id),
            username: self.username,
            email: self.email,
            password_hash: PasswordHash::from_db(self.password_hash)?,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    full_name: String,
    email: String,
    password_hash: String,
    bank_account_number: String,
    account_type: String,
    balance: f64,
    date_opened: DateTime<Utc>,
    status: String,
}

impl CustomerRow {
    fn into_customer(self) -> BankResult<Customer> {
        Ok(Customer {
            id: CustomerId::from_i64(self.id),
            full_name: self.full_name,
            email: self.email,
            password_hash: PasswordHash::from_db(self.password_hash)?,
            bank_account_number: BankAccountNumber::from_db(self.bank_account_number),
            account_type: self.account_type,
            balance: self.balance,
            date_opened: self.date_opened,
            status: CustomerStatus::from_db(self.status),
        })
    }
}

#[derive(sqlx::FromRow)]
struct AuthSessionRow {
    session_id: String,
    principal_id: i64,
    display_name: String,
    role: String,
    expires_at_ms: i64,
    created_at: DateTime<Utc>,
}

impl AuthSessionRow {
    fn into_session(self) -> BankResult<AuthSession> {
        let session_id = Uuid::parse_str(&self.session_id)
            .map_err(|e| BankError::Internal(format!("Invalid session_id: {}", e)))?;
        let role = Role::from_code(&self.role)
            .ok_or_else(|| BankError::Internal(format!("Invalid role: {}", self.role)))?;

        Ok(AuthSession {
            session_id,
            principal_id: self.principal_id,
            display_name: self.display_name,
            role,
            expires_at_ms: self.expires_at_ms,
            created_at: self.created_at,
        })
    }
}
