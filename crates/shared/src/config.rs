//! Application configuration management.

use serde::Deserialize;

/// Run mode in which a missing JWT secret is fatal.
pub const PRODUCTION_MODE: &str = "production";

/// Secret used outside production when none is configured.
pub const DEVELOPMENT_JWT_SECRET: &str = "moneymatic-development-secret";

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// JWT configuration.
    #[serde(default)]
    pub jwt: JwtSettings,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Seconds to wait when connecting or acquiring a pooled connection.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    8
}

/// JWT configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JwtSettings {
    /// Secret key for signing tokens.
    #[serde(default)]
    pub secret: Option<String>,
    /// Token expiration in seconds.
    #[serde(default = "default_token_expiry")]
    pub token_expiry_secs: u64,
}

fn default_token_expiry() -> u64 {
    604_800 // 7 days
}

impl JwtSettings {
    /// Returns the signing secret for the given run mode.
    ///
    /// Outside production a missing secret falls back to
    /// [`DEVELOPMENT_JWT_SECRET`]; the caller is expected to warn about it.
    ///
    /// # Errors
    ///
    /// Returns an error in production when no secret is configured.
    pub fn secret_for(&self, run_mode: &str) -> Result<String, config::ConfigError> {
        match self.secret.as_deref().map(str::trim) {
            Some(secret) if !secret.is_empty() => Ok(secret.to_string()),
            _ if run_mode == PRODUCTION_MODE => Err(config::ConfigError::Message(
                "jwt.secret is required in production".to_string(),
            )),
            _ => Ok(DEVELOPMENT_JWT_SECRET.to_string()),
        }
    }

    /// Returns true when no usable secret is configured.
    #[must_use]
    pub fn is_secret_missing(&self) -> bool {
        self.secret.as_deref().is_none_or(|s| s.trim().is_empty())
    }
}

/// Returns the current run mode (`RUN_MODE`, default `development`).
#[must_use]
pub fn run_mode() -> String {
    std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string())
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `MONEYMATIC__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = run_mode();

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("MONEYMATIC")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_environment() {
        temp_env::with_vars(
            [
                ("MONEYMATIC__DATABASE__URL", Some("postgres://localhost/mm_test")),
                ("MONEYMATIC__SERVER__PORT", Some("6001")),
                ("MONEYMATIC__JWT__SECRET", Some("s3cret")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.database.url, "postgres://localhost/mm_test");
                assert_eq!(config.database.max_connections, 10);
                assert_eq!(config.server.port, 6001);
                assert_eq!(config.server.host, "0.0.0.0");
                assert_eq!(config.jwt.secret.as_deref(), Some("s3cret"));
                assert_eq!(config.jwt.token_expiry_secs, 604_800);
            },
        );
    }

    #[test]
    fn test_load_requires_database_url() {
        temp_env::with_vars_unset(["MONEYMATIC__DATABASE__URL"], || {
            assert!(AppConfig::load().is_err());
        });
    }

    #[test]
    fn test_secret_for_configured() {
        let settings = JwtSettings {
            secret: Some("abc".to_string()),
            token_expiry_secs: 60,
        };
        assert_eq!(settings.secret_for(PRODUCTION_MODE).unwrap(), "abc");
        assert!(!settings.is_secret_missing());
    }

    #[test]
    fn test_secret_for_missing() {
        let settings = JwtSettings {
            secret: Some("   ".to_string()),
            token_expiry_secs: 60,
        };
        assert!(settings.is_secret_missing());
        assert!(settings.secret_for(PRODUCTION_MODE).is_err());
        assert_eq!(
            settings.secret_for("development").unwrap(),
            DEVELOPMENT_JWT_SECRET
        );
    }
}
