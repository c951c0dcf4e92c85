//! Error Kind - Classification of errors
//!
//! One kind is one HTTP status; the finer meaning lives in the message.

use std::fmt;

use serde::Serialize;

/// エラー種別の列挙体
///
/// 銀行管理 API が返しうる失敗を HTTP ステータス単位で分類します。
/// 細かい意味（どのフィールドが欠けているか等）はメッセージ側で表現します。
///
/// ## Notes
/// * `non_exhaustive` - 列挙子が追加される可能性があることを示す
/// * シリアライズ形式は `snake_case`（例: `not_found`）
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Conflict;
/// assert_eq!(kind.status_code(), 409);
/// assert_eq!(kind.title(), "Conflict");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - 必須項目の欠落、パスワード確認の不一致
    BadRequest,
    /// 401 - 未ログイン、または認証情報の拒否
    Unauthorized,
    /// 403 - ログイン済みだがロールが異なる
    Forbidden,
    /// 404 - 対象のアカウントが存在しない
    NotFound,
    /// 409 - ユーザー名/メールの重複、自分自身の削除
    Conflict,
    /// 500 - サーバー内部エラー（詳細はクライアントに出さない）
    InternalServerError,
    /// 503 - データベースがビジー、または接続不可
    ServiceUnavailable,
}

impl ErrorKind {
    /// 対応する HTTP ステータスコード
    #[inline]
    pub const fn status_code(self) -> u16 {
        use ErrorKind::*;
        match self {
            BadRequest => 400,
            Unauthorized => 401,
            Forbidden => 403,
            NotFound => 404,
            Conflict => 409,
            InternalServerError => 500,
            ServiceUnavailable => 503,
        }
    }

    /// ステータスの理由句
    ///
    /// RFC 7807 の `title` としてそのまま使用されます。
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::ServiceUnavailable.title(), "Service Unavailable");
    /// ```
    #[inline]
    pub const fn title(self) -> &'static str {
        use ErrorKind::*;
        match self {
            BadRequest => "Bad Request",
            Unauthorized => "Unauthorized",
            Forbidden => "Forbidden",
            NotFound => "Not Found",
            Conflict => "Conflict",
            InternalServerError => "Internal Server Error",
            ServiceUnavailable => "Service Unavailable",
        }
    }

    /// 5xx 系かどうか（ログレベルの判定に使用）
    #[inline]
    pub const fn is_server_error(self) -> bool {
        self.status_code() >= 500
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statuses_are_distinct() {
        let kinds = [
            ErrorKind::BadRequest,
            ErrorKind::Unauthorized,
            ErrorKind::Forbidden,
            ErrorKind::NotFound,
            ErrorKind::Conflict,
            ErrorKind::InternalServerError,
            ErrorKind::ServiceUnavailable,
        ];
        let mut codes: Vec<u16> = kinds.iter().map(|k| k.status_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_server_errors() {
        assert!(!ErrorKind::Conflict.is_server_error());
        assert!(!ErrorKind::Unauthorized.is_server_error());
        assert!(ErrorKind::ServiceUnavailable.is_server_error());
        assert!(ErrorKind::InternalServerError.is_server_error());
    }

    #[test]
    fn test_serialized_form() {
        assert_eq!(
            serde_json::to_string(&ErrorKind::NotFound).unwrap(),
            "\"not_found\""
        );
        assert_eq!(ErrorKind::Forbidden.to_string(), "Forbidden");
    }
}
