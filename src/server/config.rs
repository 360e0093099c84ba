//! Environment configuration.
//!
//! Values are read once at startup (after `dotenvy` has populated the environment) into
//! [`Config`]. Every variable has a default except `SESSION_SECRET`, which only enables
//! signed session cookies when present.

use std::str::FromStr;

use time::OffsetDateTime;
use tower_sessions::cookie::SameSite;

use crate::server::error::config::ConfigError;

/// Minimum length in bytes of the key used to sign session cookies.
pub const MIN_SESSION_SECRET_LEN: usize = 64;

pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub admin_username: String,
    pub admin_password: String,
    pub session: SessionConfig,
}

/// Cookie policy applied by the session layer.
pub struct SessionConfig {
    pub cookie_name: String,
    /// Inactivity expiry in seconds. Ignored when `expires_at` is set.
    pub max_age_secs: Option<i64>,
    /// Absolute expiry shared by every session.
    pub expires_at: Option<OffsetDateTime>,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
    pub domain: Option<String>,
    /// Key for signed cookies; `None` leaves cookies unsigned.
    pub secret: Option<Vec<u8>>,
    pub cleanup_interval_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "tea_inventory.sid".to_string(),
            max_age_secs: Some(86_400),
            expires_at: None,
            secure: !cfg!(debug_assertions),
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
            domain: None,
            secret: None,
            cleanup_interval_secs: 3_600,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = SessionConfig::default();

        let session = SessionConfig {
            cookie_name: lookup("SESSION_COOKIE_NAME").unwrap_or(defaults.cookie_name),
            max_age_secs: match lookup("SESSION_MAX_AGE_SECS") {
                Some(value) => Some(parse_var("SESSION_MAX_AGE_SECS", &value)?),
                None => defaults.max_age_secs,
            },
            expires_at: lookup("SESSION_EXPIRES_AT")
                .map(|value| parse_timestamp("SESSION_EXPIRES_AT", &value))
                .transpose()?,
            secure: optional_bool(&lookup, "SESSION_SECURE")?.unwrap_or(defaults.secure),
            http_only: optional_bool(&lookup, "SESSION_HTTP_ONLY")?.unwrap_or(defaults.http_only),
            same_site: lookup("SESSION_SAME_SITE")
                .map(|value| parse_same_site(&value))
                .transpose()?
                .unwrap_or(defaults.same_site),
            path: lookup("SESSION_PATH").unwrap_or(defaults.path),
            domain: lookup("SESSION_DOMAIN").filter(|d| !d.is_empty()),
            secret: lookup("SESSION_SECRET")
                .map(|secret| parse_secret(&secret))
                .transpose()?,
            cleanup_interval_secs: match lookup("SESSION_CLEANUP_INTERVAL_SECS") {
                Some(value) => parse_var("SESSION_CLEANUP_INTERVAL_SECS", &value)?,
                None => defaults.cleanup_interval_secs,
            },
        };

        if let Some(max_age) = session.max_age_secs {
            if max_age <= 0 {
                return Err(ConfigError::InvalidEnvValue {
                    var: "SESSION_MAX_AGE_SECS".to_string(),
                    reason: "must be greater than zero".to_string(),
                });
            }
        }

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite://tea_inventory.db?mode=rwc".to_string()),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: match lookup("PORT") {
                Some(value) => parse_var("PORT", &value)?,
                None => 5000,
            },
            admin_username: lookup("ADMIN_USERNAME").unwrap_or_else(|| "admin".to_string()),
            admin_password: lookup("ADMIN_PASSWORD").unwrap_or_else(|| "admin123".to_string()),
            session,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

fn optional_bool<F>(lookup: &F, var: &str) -> Result<Option<bool>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var).map(|value| parse_var::<bool>(var, &value)).transpose()
}

fn parse_timestamp(var: &str, value: &str) -> Result<OffsetDateTime, ConfigError> {
    OffsetDateTime::parse(value.trim(), &time::format_description::well_known::Rfc3339).map_err(
        |e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        },
    )
}

/// `true` means strict and `false` means lax, matching the boolean form accepted by
/// common session middleware; the named policies map directly.
pub fn parse_same_site(value: &str) -> Result<SameSite, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "strict" => Ok(SameSite::Strict),
        "false" | "lax" => Ok(SameSite::Lax),
        "none" => Ok(SameSite::None),
        other => Err(ConfigError::InvalidEnvValue {
            var: "SESSION_SAME_SITE".to_string(),
            reason: format!("expected true, false, lax, strict or none, got {:?}", other),
        }),
    }
}

fn parse_secret(secret: &str) -> Result<Vec<u8>, ConfigError> {
    if secret.len() < MIN_SESSION_SECRET_LEN {
        return Err(ConfigError::InvalidEnvValue {
            var: "SESSION_SECRET".to_string(),
            reason: format!("must be at least {} bytes", MIN_SESSION_SECRET_LEN),
        });
    }

    Ok(secret.as_bytes().to_vec())
}
