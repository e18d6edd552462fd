//! Load service settings from the environment (after `.env`, if present).

use crate::error::ConfigError;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/restaurant";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3644";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    /// Maximum accepted request body size in bytes.
    pub body_limit: usize,
    /// Create the database named in `database_url` if it does not exist yet.
    pub create_database: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: DEFAULT_BIND_ADDR.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            body_limit: DEFAULT_BODY_LIMIT,
            create_database: true,
        }
    }
}

impl AppConfig {
    /// Read `DATABASE_URL`, `BIND_ADDR`, `DB_MAX_CONNECTIONS`, `REQUEST_BODY_LIMIT` and `CREATE_DATABASE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup. Missing keys fall back to defaults; blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = AppConfig::default();

        let max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(v) => match v.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", value: v }),
            },
            None => defaults.max_connections,
        };
        let body_limit = match get("REQUEST_BODY_LIMIT") {
            Some(v) => v
                .parse::<usize>()
                .map_err(|_| ConfigError::Invalid { key: "REQUEST_BODY_LIMIT", value: v })?,
            None => defaults.body_limit,
        };
        let create_database = match get("CREATE_DATABASE") {
            Some(v) => parse_bool(&v).ok_or(ConfigError::Invalid { key: "CREATE_DATABASE", value: v })?,
            None => defaults.create_database,
        };

        Ok(AppConfig {
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
            max_connections,
            body_limit,
            create_database,
        })
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
