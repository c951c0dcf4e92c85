//! Bank Error Types
//!
//! Named, user-recoverable failures of the auth gate and the account
//! lifecycle, plus the infrastructure failures underneath them. Every variant
//! maps onto a `kernel::error::AppError` for rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::classify_sqlx, kind::ErrorKind};
use thiserror::Error;

pub type BankResult<T> = Result<T, BankError>;

#[derive(Debug, Error)]
pub enum BankError {
    /// A required field was empty or absent
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Username already exists")]
    DuplicateUsername,

    #[error("Email already exists")]
    DuplicateEmail,

    /// Generated account number collided with an existing one
    #[error("Bank account number already exists")]
    AccountNumberTaken,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("You cannot delete your own account")]
    SelfDeletion,

    #[error("Please log in to access this page")]
    NotAuthenticated,

    #[error("You do not have permission to access this page")]
    Forbidden,

    /// Unknown identifier, wrong password and inactive account all land here
    #[error("Invalid credentials or inactive account")]
    InvalidCredentials,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BankError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BankError::MissingField(_) | BankError::PasswordMismatch => ErrorKind::BadRequest,
            BankError::DuplicateUsername
            | BankError::DuplicateEmail
            | BankError::AccountNumberTaken
            | BankError::SelfDeletion => ErrorKind::Conflict,
            BankError::NotFound(_) => ErrorKind::NotFound,
            BankError::NotAuthenticated | BankError::InvalidCredentials => ErrorKind::Unauthorized,
            BankError::Forbidden => ErrorKind::Forbidden,
            BankError::Database(e) => classify_sqlx(e).0,
            BankError::Migration(_) | BankError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            BankError::NotAuthenticated => err.with_action("Log in and try again"),
            BankError::AccountNumberTaken => err.with_action("Submit the form again"),
            // Never leak store details to clients
            BankError::Database(e) => match classify_sqlx(e) {
                (ErrorKind::ServiceUnavailable, message) => {
                    AppError::new(ErrorKind::ServiceUnavailable, message)
                        .with_action("Try again in a moment")
                }
                (kind, _) if kind.is_server_error() => AppError::internal("Internal server error"),
                (kind, message) => AppError::new(kind, message),
            },
            BankError::Migration(_) | BankError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            _ => err,
        }
    }

    fn log(&self) {
        match self {
            BankError::Database(e) => {
                tracing::error!(error = %e, "Bank database error");
            }
            BankError::Migration(e) => {
                tracing::error!(error = %e, "Bank migration error");
            }
            BankError::Internal(msg) => {
                tracing::error!(message = %msg, "Bank internal error");
            }
            BankError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            BankError::AccountNumberTaken => {
                tracing::warn!("Generated bank account number collided");
            }
            BankError::Forbidden => {
                tracing::warn!("Role check failed");
            }
            _ => {
                tracing::debug!(error = %self, "Bank error");
            }
        }
    }
}

impl IntoResponse for BankError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<platform::password::PasswordHashError> for BankError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        BankError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(BankError::MissingField("email").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(BankError::PasswordMismatch.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(BankError::DuplicateUsername.status_code(), StatusCode::CONFLICT);
        assert_eq!(BankError::DuplicateEmail.status_code(), StatusCode::CONFLICT);
        assert_eq!(BankError::SelfDeletion.status_code(), StatusCode::CONFLICT);
        assert_eq!(BankError::NotFound("Customer").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(BankError::NotAuthenticated.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(BankError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(BankError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            BankError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(BankError::MissingField("Username").to_string(), "Username is required");
        assert_eq!(BankError::NotFound("Administrator").to_string(), "Administrator not found");
    }

    #[test]
    fn test_internal_details_hidden() {
        let app = BankError::Internal("pool exploded at 0xdead".into()).to_app_error();
        assert_eq!(app.message(), "Internal server error");
    }

    #[test]
    fn test_exhausted_pool_is_retryable() {
        let err = BankError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_app_error().action(), Some("Try again in a moment"));

        let err = BankError::Database(sqlx::Error::Protocol("bad frame".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_app_error().message(), "Internal server error");
    }
}
