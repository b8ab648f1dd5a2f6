//! Environment-based application configuration.
//!
//! Values are read once at startup. `DATABASE_URL` and `JWT_SECRET` are required; every
//! other variable falls back to a default suitable for local development.

use chrono::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SESSION_TIMEOUT_SECS: i64 = 60 * 60 * 24 * 7;
const DEFAULT_SESSION_COOKIE_NAME: &str = "session";
const DEFAULT_PUBLIC_SESSION_COOKIE_NAME: &str = "public_session";
const DEFAULT_APP_DOMAIN: &str = "localhost";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,

    /// Secret used to sign session tokens.
    pub jwt_secret: String,
    /// Lifetime of issued tokens and of the session cookies carrying them.
    pub session_timeout: Duration,

    pub session_cookie_name: String,
    /// Cookie exposing the token's claims segment to scripts.
    pub public_session_cookie_name: String,
    pub app_domain: String,

    pub bind_address: String,
    /// Single allowed CORS origin; `None` disables cross-origin access.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parseable
    /// - `Err(AppError::ConfigErr)` - Missing required variable or invalid value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };
        let or_default = |name: &str, default: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let session_timeout = match lookup("SESSION_TIMEOUT_SECS") {
            Some(raw) => parse_timeout(&raw)?,
            None => Duration::seconds(DEFAULT_SESSION_TIMEOUT_SECS),
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            session_timeout,
            session_cookie_name: or_default("SESSION_COOKIE_NAME", DEFAULT_SESSION_COOKIE_NAME),
            public_session_cookie_name: or_default(
                "PUBLIC_SESSION_COOKIE_NAME",
                DEFAULT_PUBLIC_SESSION_COOKIE_NAME,
            ),
            app_domain: or_default("APP_DOMAIN", DEFAULT_APP_DOMAIN),
            bind_address: or_default("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            cors_origin: lookup("CORS_ORIGIN").filter(|v| !v.is_empty()),
        })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvVar {
        name: "SESSION_TIMEOUT_SECS".to_string(),
        reason: reason.to_string(),
    };

    let secs: i64 = raw
        .trim()
        .parse()
        .map_err(|_| invalid("expected a whole number of seconds"))?;
    if secs <= 0 {
        return Err(invalid("must be greater than zero"));
    }

    Ok(Duration::seconds(secs))
}
