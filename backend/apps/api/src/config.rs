//! Server configuration from environment variables

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use bank::BankConfig;

const DEFAULT_DATABASE_URL: &str = "sqlite://banking.db?mode=rwc";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";
const MIN_SECRET_LEN: usize = 32;

pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub bank: BankConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        let frontend_origins = env::var("FRONTEND_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            database_url,
            bind_addr,
            frontend_origins,
            bank: bank_config()?,
        })
    }
}

fn bank_config() -> anyhow::Result<BankConfig> {
    let mut config = match env::var("SECRET_KEY") {
        Ok(encoded) => {
            let secret = platform::crypto::decode_secret(&encoded)
                .context("SECRET_KEY must be standard base64")?;
            if secret.len() < MIN_SECRET_LEN {
                bail!("SECRET_KEY must decode to at least {MIN_SECRET_LEN} bytes");
            }
            BankConfig {
                session_secret: secret,
                ..BankConfig::default()
            }
        }
        Err(_) => {
            tracing::warn!("SECRET_KEY not set; sessions will not survive a restart");
            BankConfig::with_random_secret()
        }
    };

    config.cookie_secure = env_flag("COOKIE_SECURE")?.unwrap_or(false);

    if let Ok(same_site) = env::var("COOKIE_SAME_SITE") {
        config.cookie_same_site = same_site.parse()?;
    }

    if let Ok(ttl) = env::var("SESSION_TTL_SECS") {
        config.session_ttl = parse_session_ttl(&ttl)?;
    }

    config.password_pepper = env::var("PASSWORD_PEPPER")
        .ok()
        .filter(|p| !p.is_empty())
        .map(String::into_bytes);

    Ok(config)
}

fn parse_session_ttl(raw: &str) -> anyhow::Result<Duration> {
    let secs: u64 = raw
        .trim()
        .parse()
        .context("SESSION_TTL_SECS must be a whole number of seconds")?;
    let ttl = Duration::from_secs(secs);
    if ttl.is_zero() || ttl > BankConfig::MAX_SESSION_TTL {
        bail!(
            "SESSION_TTL_SECS must be between 1 and {}, got {secs}",
            BankConfig::MAX_SESSION_TTL.as_secs()
        );
    }
    Ok(ttl)
}

fn env_flag(name: &str) -> anyhow::Result<Option<bool>> {
    match env::var(name) {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            other => bail!("{name} must be a boolean, got {other:?}"),
        },
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ttl_accepts_sane_values() {
        assert_eq!(parse_session_ttl("3600").unwrap(), Duration::from_secs(3600));
        assert_eq!(
            parse_session_ttl(&BankConfig::MAX_SESSION_TTL.as_secs().to_string()).unwrap(),
            BankConfig::MAX_SESSION_TTL
        );
    }

    #[test]
    fn test_session_ttl_rejects_out_of_range() {
        assert!(parse_session_ttl("0").is_err());
        assert!(parse_session_ttl(&(u64::MAX / 2000).to_string()).is_err());
        assert!(parse_session_ttl(&u64::MAX.to_string()).is_err());
        assert!(parse_session_ttl("-5").is_err());
        assert!(parse_session_ttl("12h").is_err());
    }
}
