use std::str::FromStr;

use todo_db::{DbConfig, DbConfigError};

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Runtime environment label reported by `/health` (default: `development`).
    pub environment: String,
    /// Allowed CORS origins from comma-separated `CORS_ORIGINS`.
    /// `None` allows any origin, which native mobile clients rely on.
    pub cors_origins: Option<Vec<String>>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Database connection settings.
    pub database: DbConfig,
}

/// An environment variable held a value that does not parse.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error(transparent)]
    Database(#[from] DbConfigError),
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default       |
    /// |------------------------|---------------|
    /// | `HOST`                 | `0.0.0.0`     |
    /// | `PORT`                 | `3000`        |
    /// | `APP_ENV`              | `development` |
    /// | `CORS_ORIGINS`         | any origin    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`          |
    ///
    /// Database variables are documented on [`DbConfig::from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = parse_or("PORT", "port number", lookup("PORT"), 3000)?;

        let environment = lookup("APP_ENV")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "development".into());

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty() && !origins.iter().any(|o| o == "*"));

        let request_timeout_secs: u64 = parse_or(
            "REQUEST_TIMEOUT_SECS",
            "number of seconds",
            lookup("REQUEST_TIMEOUT_SECS"),
            30,
        )?;

        let database = DbConfig::from_lookup(&lookup)?;

        Ok(Self {
            host,
            port,
            environment,
            cors_origins,
            request_timeout_secs,
            database,
        })
    }
}

fn parse_or<T: FromStr>(
    var: &'static str,
    expected: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.environment, "development");
        assert!(config.cors_origins.is_none());
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.database.database, "todoapp");
    }

    #[test]
    fn overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("APP_ENV", "production"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("DATABASE_URL", "postgres://u:p@db/todos"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, "production");
        assert_eq!(
            config.cors_origins,
            Some(vec!["http://a.test".to_string(), "http://b.test".to_string()])
        );
        assert_eq!(
            config.database.url.as_deref(),
            Some("postgres://u:p@db/todos")
        );
    }

    #[test]
    fn wildcard_cors_means_any_origin() {
        let config = ServerConfig::from_lookup(lookup(&[("CORS_ORIGINS", "*")])).unwrap();
        assert!(config.cors_origins.is_none());
    }

    #[test]
    fn malformed_port_is_an_error() {
        assert_matches!(
            ServerConfig::from_lookup(lookup(&[("PORT", "http")])),
            Err(ConfigError::Invalid { var: "PORT", .. })
        );
    }

    #[test]
    fn malformed_database_port_is_an_error() {
        assert_matches!(
            ServerConfig::from_lookup(lookup(&[("DB_PORT", "-1")])),
            Err(ConfigError::Database(_))
        );
    }
}
