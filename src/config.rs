use axum::http::HeaderValue;
use chrono::{Duration, Utc};

use crate::auth::SigningSecret;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 20;
// 100 years; keeps `now + ttl` inside the representable DateTime range.
pub const MAX_TOKEN_TTL_MINUTES: i64 = 100 * 366 * 24 * 60;

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: String,

    pub secret: SigningSecret,
    pub token_ttl: Duration,

    pub cors_origins: CorsOrigins,
}

/// Parsed `CORS_ORIGINS`. A `*` entry anywhere in the list opens CORS to every origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<HeaderValue>),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests do not have to
    /// touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let secret = lookup("SECRET_KEY").ok_or(ConfigError::Missing("SECRET_KEY"))?;
        let secret = SigningSecret::new(secret.into_bytes())?;

        let ttl_minutes: i64 = match lookup("JWT_EXPIRATION_MINUTES") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("JWT_EXPIRATION_MINUTES"))?,
            None => DEFAULT_TOKEN_TTL_MINUTES,
        };
        if !(1..=MAX_TOKEN_TTL_MINUTES).contains(&ttl_minutes) {
            return Err(ConfigError::Invalid("JWT_EXPIRATION_MINUTES"));
        }
        let token_ttl = Duration::try_minutes(ttl_minutes)
            .filter(|ttl| Utc::now().checked_add_signed(*ttl).is_some())
            .ok_or(ConfigError::Invalid("JWT_EXPIRATION_MINUTES"))?;

        let cors_origins = parse_origins(&lookup("CORS_ORIGINS").unwrap_or_default())?;

        Ok(Self {
            bind_addr,
            secret,
            token_ttl,
            cors_origins,
        })
    }
}

// "http://a.example,http://b.example" or "*"
fn parse_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    entries
        .into_iter()
        .map(|s| HeaderValue::from_str(s).map_err(|_| ConfigError::Invalid("CORS_ORIGINS")))
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),

    #[error("Signing secret must be at least {min} bytes")]
    WeakSecret { min: usize },
}
