use chrono::Duration;
use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Signing secret used when `JWT_SECRET` is unset outside production.
/// Operating with it is a misconfiguration and is reported at startup.
pub const FALLBACK_JWT_SECRET: &str = "skill-portal-insecure-default-secret";

pub const DEFAULT_JWT_EXPIRY: &str = "7d";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set when APP_ENV is production")]
    MissingSecret,

    #[error(
        "Invalid JWT_EXPIRY value '{0}': expected <number>[ ]<unit> lasting at least one second, \
         unit one of ms, s, m, h, d, w, y or their long forms (seconds, minutes, hours, days, weeks, years); \
         a bare number is seconds"
    )]
    InvalidExpiry(String),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
    pub edge: EdgeConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
    /// Seconds to wait when acquiring a pooled connection
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSource {
    Environment,
    Fallback,
}

#[derive(Clone)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub secret_source: SecretSource,
    pub jwt_expiry: Duration,
}

// Keeps the secret out of logs and panic messages.
impl std::fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"<redacted>")
            .field("secret_source", &self.secret_source)
            .field("jwt_expiry", &self.jwt_expiry)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct EdgeConfig {
    pub protected_prefixes: Vec<String>,
    pub login_path: String,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            protected_prefixes: vec!["/app".to_string(), "/admin".to_string()],
            login_path: "/auth/login".to_string(),
        }
    }
}

impl SecurityConfig {
    /// True when the process is signing with the built-in fallback secret
    pub fn uses_fallback_secret(&self) -> bool {
        self.secret_source == SecretSource::Fallback
    }
}

impl AppConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = match get("APP_ENV").as_deref() {
            Some("production") | Some("prod") => Environment::Production,
            Some("staging") | Some("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        let port = parse_or("PORT", get("PORT"), 3000)?;

        let server = ServerConfig {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
        };

        let database = DatabaseConfig {
            url: get("DATABASE_URL"),
            max_connections: parse_or("DATABASE_MAX_CONNECTIONS", get("DATABASE_MAX_CONNECTIONS"), 10)?,
            connection_timeout: parse_or("DATABASE_CONNECTION_TIMEOUT", get("DATABASE_CONNECTION_TIMEOUT"), 30)?,
        };

        let (jwt_secret, secret_source) = match get("JWT_SECRET") {
            Some(secret) => (secret, SecretSource::Environment),
            None if environment == Environment::Production => return Err(ConfigError::MissingSecret),
            None => (FALLBACK_JWT_SECRET.to_string(), SecretSource::Fallback),
        };

        let expiry_raw = get("JWT_EXPIRY").unwrap_or_else(|| DEFAULT_JWT_EXPIRY.to_string());
        let jwt_expiry = parse_expiry(&expiry_raw).ok_or(ConfigError::InvalidExpiry(expiry_raw))?;

        let mut edge = EdgeConfig::default();
        if let Some(v) = get("EDGE_PROTECTED_PREFIXES") {
            edge.protected_prefixes = v
                .split(',')
                .map(|s| s.trim().trim_end_matches('/').to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Some(v) = get("EDGE_LOGIN_PATH") {
            edge.login_path = v;
        }

        Ok(Self {
            environment,
            server,
            database,
            security: SecurityConfig { jwt_secret, secret_source, jwt_expiry },
            edge,
        })
    }

    /// Emit startup diagnostics that must never be swallowed
    pub fn report(&self) {
        tracing::info!(
            "Configuration loaded: environment={:?}, jwt_expiry={}s, protected_prefixes={:?}",
            self.environment,
            self.security.jwt_expiry.num_seconds(),
            self.edge.protected_prefixes
        );
        if self.security.uses_fallback_secret() {
            tracing::warn!(
                "JWT_SECRET is not set: credentials are signed with the built-in fallback secret. \
                 Anyone who knows it can forge tokens. Set JWT_SECRET before exposing this service."
            );
        }
        if self.database.url.is_none() {
            tracing::warn!("DATABASE_URL is not set");
        }
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}

/// Parse a credential lifetime such as `3600`, `45s`, `90m`, `12h`, `7d`,
/// `7 days`, `1y` or `1500ms`. A bare number is seconds. Fractions are
/// allowed (`1.5h`). Lifetimes under one second are rejected because
/// `exp` has whole-second resolution.
pub fn parse_expiry(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    let split = raw
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(raw.len());
    let (number, unit) = raw.split_at(split);
    let amount: f64 = number.parse().ok()?;

    let unit_ms: f64 = match unit.trim().to_ascii_lowercase().as_str() {
        "" | "s" | "sec" | "secs" | "second" | "seconds" => 1_000.0,
        "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => 1.0,
        "m" | "min" | "mins" | "minute" | "minutes" => 60_000.0,
        "h" | "hr" | "hrs" | "hour" | "hours" => 3_600_000.0,
        "d" | "day" | "days" => 86_400_000.0,
        "w" | "week" | "weeks" => 604_800_000.0,
        "y" | "yr" | "yrs" | "year" | "years" => 31_557_600_000.0,
        _ => return None,
    };

    let millis = amount * unit_ms;
    if !millis.is_finite() || millis < 1_000.0 || millis > i64::MAX as f64 {
        return None;
    }
    Duration::try_milliseconds(millis as i64)
}
