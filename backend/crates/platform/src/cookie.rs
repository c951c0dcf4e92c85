//! Session Cookie
//!
//! Builds and reads the single HttpOnly cookie that carries a signed session
//! token. Path is always `/`.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use axum::http::{HeaderMap, header};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        })
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown SameSite policy {0:?}, expected strict, lax or none")]
pub struct InvalidSameSite(String);

impl FromStr for SameSite {
    type Err = InvalidSameSite;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(SameSite::Strict),
            "lax" => Ok(SameSite::Lax),
            "none" => Ok(SameSite::None),
            _ => Err(InvalidSameSite(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionCookie {
    name: String,
    secure: bool,
    same_site: SameSite,
    max_age: Option<Duration>,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            secure: true,
            same_site: SameSite::Lax,
            max_age: None,
        }
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = same_site;
        self
    }

    pub fn max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(max_age);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `Set-Cookie` value that stores `token`
    pub fn issue(&self, token: &str) -> String {
        let mut cookie = format!("{}={token}; Path=/; HttpOnly", self.name);
        self.push_policy(&mut cookie);
        if let Some(max_age) = self.max_age {
            cookie.push_str(&format!("; Max-Age={}", max_age.as_secs()));
        }
        cookie
    }

    /// `Set-Cookie` value that makes the browser drop the cookie
    pub fn clear(&self) -> String {
        let mut cookie = format!(
            "{}=; Path=/; HttpOnly; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT",
            self.name
        );
        self.push_policy(&mut cookie);
        cookie
    }

    // Browsers reject SameSite=None without Secure
    fn push_policy(&self, cookie: &mut String) {
        if self.secure || self.same_site == SameSite::None {
            cookie.push_str("; Secure");
        }
        cookie.push_str(&format!("; SameSite={}", self.same_site));
    }

    /// Token from the request's `Cookie` headers, if present and non-empty
    pub fn read(&self, headers: &HeaderMap) -> Option<String> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(key, value)| *key == self.name && !value.is_empty())
            .map(|(_, value)| value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(raw: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static(raw));
        headers
    }

    #[test]
    fn test_issue() {
        let cookie = SessionCookie::new("bank_session")
            .max_age(Duration::from_secs(3600))
            .issue("abc.def");

        assert!(cookie.starts_with("bank_session=abc.def; Path=/; HttpOnly"));
        assert!(cookie.contains("; Secure"));
        assert!(cookie.contains("; SameSite=Lax"));
        assert!(cookie.ends_with("; Max-Age=3600"));
    }

    #[test]
    fn test_clear_expires_immediately() {
        let cookie = SessionCookie::new("bank_session").secure(false).clear();
        assert!(cookie.starts_with("bank_session=;"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_same_site_none_forces_secure() {
        let cookie = SessionCookie::new("s")
            .secure(false)
            .same_site(SameSite::None)
            .issue("t");
        assert!(cookie.contains("; Secure; SameSite=None"));
    }

    #[test]
    fn test_read() {
        let cookie = SessionCookie::new("bank_session");

        assert_eq!(
            cookie.read(&headers("theme=dark; bank_session=abc123")),
            Some("abc123".to_string())
        );
        assert_eq!(cookie.read(&headers("bank_session=")), None);
        assert_eq!(cookie.read(&headers("other_session=abc")), None);
        assert_eq!(cookie.read(&HeaderMap::new()), None);
    }

    #[test]
    fn test_read_across_multiple_headers() {
        let mut map = headers("theme=dark");
        map.append(header::COOKIE, HeaderValue::from_static("bank_session=xyz"));
        assert_eq!(
            SessionCookie::new("bank_session").read(&map),
            Some("xyz".to_string())
        );
    }

    #[test]
    fn test_parse_same_site() {
        assert_eq!(" Strict ".parse::<SameSite>().unwrap(), SameSite::Strict);
        assert_eq!("none".parse::<SameSite>().unwrap(), SameSite::None);
        assert!("sometimes".parse::<SameSite>().is_err());
    }
}
