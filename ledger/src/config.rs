use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;

const IN_MEMORY_URL: &str = "sqlite::memory:";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Pool size. The ledger holds a single connection unless told otherwise.
    pub max_connections: u32,
    pub connect_timeout: Duration,
    /// Enable sqlx statement logging
    pub sql_logging: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| IN_MEMORY_URL.to_string()),
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS", 1)?,
            connect_timeout: Duration::from_secs(parse_var("DATABASE_CONNECT_TIMEOUT_SECS", 8)?),
            sql_logging: parse_var("DATABASE_SQL_LOGGING", false)?,
        })
    }

    /// Configuration for a private in-memory SQLite database
    pub fn in_memory() -> Self {
        Self {
            database_url: IN_MEMORY_URL.to_string(),
            max_connections: 1,
            connect_timeout: Duration::from_secs(8),
            sql_logging: false,
        }
    }

    /// Check if the database only lives as long as its connection
    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}

fn parse_var<T: FromStr>(key: &str, default: T) -> Result<T, AppError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} has an invalid value: {:?}", key, raw))),
        Err(_) => Ok(default),
    }
}
