//! Application Error - Unified error type rendered to HTTP clients
//!
//! Defines [`AppError`], [`AppResult<T>`] and the [`ProblemDetails`] view.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use serde::Serialize;

use super::kind::ErrorKind;

/// アプリケーション統一エラー型
///
/// クレート境界を越えて HTTP クライアントまで届くエラーです。
/// ドメイン側のエラー（`BankError` 等）はレスポンス化の直前にこの型へ変換されます。
///
/// ## Fields
/// * `kind` - エラーの分類（HTTP ステータスコードにマッピング）
/// * `message` - クライアントに表示してよいメッセージ
/// * `action` - ユーザーが次に取るべき行動（オプション）
/// * `source` - 元のエラー（ログ専用、レスポンスには含めない）
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::Unauthorized, "Please log in to access this page")
///     .with_action("Log in and try again");
/// assert_eq!(err.status_code(), 401);
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    action: Option<Cow<'static, str>>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// `Result<T, AppError>` の省略形
pub type AppResult<T> = Result<T, AppError>;

/// [`AppError`] の RFC 7807 表現
///
/// ## Fields
/// * `type` - `https://httpstatuses.io/<status>`
/// * `title` - [`ErrorKind::title`]
/// * `detail` - ユーザー向けメッセージ
/// * `action` - 設定されている場合のみ出力
#[derive(Debug, Serialize)]
pub struct ProblemDetails<'a> {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: &'static str,
    pub status: u16,
    pub detail: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<&'a str>,
}

impl AppError {
    /// 新しいエラーを作成
    ///
    /// ## Arguments
    /// * `kind` - エラー種別
    /// * `message` - クライアントに表示してよいメッセージ
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            source: None,
        }
    }

    /// 500 エラーの短縮形
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    /// ユーザーが取るべき行動を付与
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// 元のエラーを付与（レスポンスには出力されない）
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn problem(&self) -> ProblemDetails<'_> {
        ProblemDetails {
            problem_type: format!("https://httpstatuses.io/{}", self.status_code()),
            title: self.kind.title(),
            status: self.status_code(),
            detail: &self.message,
            action: self.action(),
        }
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("action", &self.action)
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn Error + 'static))
    }
}
