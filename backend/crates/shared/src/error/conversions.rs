//! Conversions into [`AppError`] (feature-gated)

#[cfg(feature = "sqlx")]
use super::{app_error::AppError, kind::ErrorKind};

/// Classify a database failure without consuming it
///
/// SQLite extended result codes: <https://www.sqlite.org/rescode.html>
#[cfg(feature = "sqlx")]
pub fn classify_sqlx(err: &sqlx::Error) -> (ErrorKind, &'static str) {
    match err {
        sqlx::Error::RowNotFound => (ErrorKind::NotFound, "Record not found"),
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            (ErrorKind::ServiceUnavailable, "Database is unavailable")
        }
        sqlx::Error::Io(_) => (ErrorKind::ServiceUnavailable, "Database connection error"),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            // SQLITE_CONSTRAINT_UNIQUE, SQLITE_CONSTRAINT_PRIMARYKEY
            Some("2067") | Some("1555") => (ErrorKind::Conflict, "Duplicate value"),
            // SQLITE_CONSTRAINT_NOTNULL
            Some("1299") => (ErrorKind::BadRequest, "Required value is missing"),
            // SQLITE_BUSY, SQLITE_LOCKED
            Some("5") | Some("6") => (ErrorKind::ServiceUnavailable, "Database is busy"),
            _ => (ErrorKind::InternalServerError, "Database error"),
        },
        _ => (ErrorKind::InternalServerError, "Database error"),
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let (kind, message) = classify_sqlx(&err);
        AppError::new(kind, message).with_source(err)
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for super::app_error::AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.problem())).into_response()
    }
}
