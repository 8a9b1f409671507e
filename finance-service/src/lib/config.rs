use std::env;
use std::time::Duration;

use chrono::Utc;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Application configuration for finance-service.
///
/// Loaded from configuration files with environment variable overrides.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub token: TokenConfig,
    #[serde(default)]
    pub password: PasswordConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// HTTP server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// PostgreSQL database and pool configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_max_lifetime_secs")]
    pub max_lifetime_secs: u64,
}

impl DatabaseConfig {
    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }
}

/// Session token configuration.
///
/// `symmetric_key` is the base64 encoding of exactly 32 bytes.
#[derive(Debug, Deserialize, Clone)]
pub struct TokenConfig {
    pub symmetric_key: String,
    #[serde(default = "default_validity_hours")]
    pub validity_hours: i64,
}

impl TokenConfig {
    /// Token lifetime.
    ///
    /// Fails for non-positive windows and for windows that would push the
    /// expiry of a token issued now past the representable date range.
    pub fn validity(&self) -> Result<chrono::Duration, ConfigError> {
        if self.validity_hours <= 0 {
            return Err(ConfigError::Message(
                "token.validity_hours must be positive".to_string(),
            ));
        }

        chrono::Duration::try_hours(self.validity_hours)
            .filter(|validity| Utc::now().checked_add_signed(*validity).is_some())
            .ok_or_else(|| {
                ConfigError::Message(format!(
                    "token.validity_hours is out of range: {}",
                    self.validity_hours
                ))
            })
    }
}

/// Argon2 work factor for password hashing.
#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    pub memory_cost_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        // Argon2 crate defaults (19 MiB, 2 passes, 1 lane)
        Self {
            memory_cost_kib: 19 * 1024,
            iterations: 2,
            parallelism: 1,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

fn default_max_connections() -> u32 {
    25
}

fn default_min_connections() -> u32 {
    10
}

fn default_max_lifetime_secs() -> u64 {
    300
}

fn default_validity_hours() -> i64 {
    24
}

/// Environment overrides: `TOKEN__SYMMETRIC_KEY` sets `token.symmetric_key`.
fn environment() -> Environment {
    Environment::default().separator("__")
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, TOKEN__SYMMETRIC_KEY, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: TOKEN__SYMMETRIC_KEY=... overrides token.symmetric_key
            .add_source(environment())
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject values that deserialize fine but cannot run the service.
    ///
    /// The symmetric key is only checked for presence here; its length is
    /// enforced when the token cipher is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Message(
                "database.url must be set".to_string(),
            ));
        }
        if self.token.symmetric_key.trim().is_empty() {
            return Err(ConfigError::Message(
                "token.symmetric_key must be set".to_string(),
            ));
        }
        self.token.validity()?;
        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigError::Message(
                "database.min_connections must not exceed database.max_connections".to_string(),
            ));
        }
        Ok(())
    }
}
