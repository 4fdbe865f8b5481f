//! Runtime configuration read from the environment.

use std::net::SocketAddr;

use chrono::Duration;
use tracing::warn;

use notepad_core::defaults;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    /// Lifetime of a login session.
    pub session_ttl: Duration,
    /// Add `Secure` to the session cookie. Enable behind HTTPS.
    pub cookie_secure: bool,
    /// Account created at startup when both are set and the email is free.
    pub seed_user: Option<SeedUser>,
}

/// Credentials for the startup seed account.
#[derive(Clone)]
pub struct SeedUser {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for SeedUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedUser")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: defaults::DATABASE_URL.to_string(),
            host: defaults::HOST.to_string(),
            port: defaults::PORT,
            db_max_connections: defaults::DB_MAX_CONNECTIONS,
            session_ttl: Duration::hours(defaults::SESSION_TTL_HOURS),
            cookie_secure: false,
            seed_user: None,
        }
    }
}

impl AppConfig {
    /// Build the configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Unparseable numbers fall back to their defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = Self::default();

        let seed_user = match (lookup("SEED_USER_EMAIL"), lookup("SEED_USER_PASSWORD")) {
            (Some(email), Some(password)) if !email.trim().is_empty() && !password.is_empty() => {
                Some(SeedUser { email, password })
            }
            _ => None,
        };

        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(base.database_url),
            host: lookup("HOST").unwrap_or(base.host),
            port: parse_or("PORT", lookup("PORT"), base.port),
            db_max_connections: parse_or(
                "DB_MAX_CONNECTIONS",
                lookup("DB_MAX_CONNECTIONS"),
                base.db_max_connections,
            ),
            session_ttl: session_ttl_or(lookup("SESSION_TTL_HOURS"), base.session_ttl),
            cookie_secure: lookup("COOKIE_SECURE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(base.cookie_secure),
            seed_user,
        }
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

/// Session lifetime in whole hours, between one hour and
/// [`defaults::MAX_SESSION_TTL_HOURS`].
fn session_ttl_or(value: Option<String>, default: Duration) -> Duration {
    let hours = parse_or("SESSION_TTL_HOURS", value, default.num_hours());
    if (1..=defaults::MAX_SESSION_TTL_HOURS).contains(&hours) {
        Duration::hours(hours)
    } else {
        warn!(
            key = "SESSION_TTL_HOURS",
            value = hours,
            max = defaults::MAX_SESSION_TTL_HOURS,
            default = default.num_hours(),
            "Session lifetime out of range, using default"
        );
        default
    }
}

fn parse_or<T>(key: &str, value: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    match value {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                warn!(key, value = %raw, default = %default, "Invalid value, using default");
                default
            }
        },
    }
}
