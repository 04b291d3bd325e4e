use std::str::FromStr;

use anyhow::Context;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Database URL (default: `sqlite://review_catalog.db`).
    pub database_url: String,
    /// Maximum pooled database connections (default: `5`).
    pub db_max_connections: u32,
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                       |
    /// |------------------------|-------------------------------|
    /// | `DATABASE_URL`         | `sqlite://review_catalog.db`  |
    /// | `DB_MAX_CONNECTIONS`   | `5`                           |
    /// | `HOST`                 | `0.0.0.0`                     |
    /// | `PORT`                 | `3000`                        |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`       |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                          |
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env_or("DATABASE_URL", "sqlite://review_catalog.db");
        let db_max_connections = parse_env("DB_MAX_CONNECTIONS", "5")?;
        let host = env_or("HOST", "0.0.0.0");
        let port = parse_env("PORT", "3000")?;

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_env("REQUEST_TIMEOUT_SECS", "30")?;

        Ok(Self {
            database_url,
            db_max_connections,
            host,
            port,
            cors_origins,
            request_timeout_secs,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = env_or(key, default);
    raw.parse()
        .with_context(|| format!("{key} must be a valid {}, got '{raw}'", std::any::type_name::<T>()))
}
