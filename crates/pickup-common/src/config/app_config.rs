//! Application configuration structs
//!
//! Every section knows how to load itself from the environment; a missing
//! required variable surfaces as a `ConfigError` naming it.

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Read an optional environment variable, falling back to a default
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

/// Read a required environment variable
fn env_required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables (and a .env file when
    /// one is present)
    ///
    /// # Errors
    /// Returns an error naming the first missing required variable
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings::load(),
            api: ServerConfig::load()?,
            database: DatabaseConfig::load()?,
            jwt: JwtConfig::load()?,
            rate_limit: RateLimitConfig::load(),
            cors: CorsConfig::load(),
        })
    }
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "AppSettings::default_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

impl AppSettings {
    fn default_name() -> String {
        "pickup-server".to_string()
    }

    fn load() -> Self {
        Self {
            name: env::var("APP_NAME").unwrap_or_else(|_| Self::default_name()),
            env: env::var("APP_ENV")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
        }
    }
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            _ => Err(()),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    fn default_host() -> String {
        "127.0.0.1".to_string()
    }

    fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("API_HOST").unwrap_or_else(|_| Self::default_host()),
            port: env_required("API_PORT")?
                .parse()
                .map_err(|_| ConfigError::MissingVar("API_PORT"))?,
        })
    }

    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "DatabaseConfig::default_max")]
    pub max_connections: u32,
    #[serde(default = "DatabaseConfig::default_min")]
    pub min_connections: u32,
}

impl DatabaseConfig {
    fn default_max() -> u32 {
        20
    }

    fn default_min() -> u32 {
        5
    }

    fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_required("DATABASE_URL")?,
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", Self::default_max()),
            min_connections: env_or("DATABASE_MIN_CONNECTIONS", Self::default_min()),
        })
    }
}

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "JwtConfig::default_expiry")]
    pub access_token_expiry: i64,
}

impl JwtConfig {
    fn default_expiry() -> i64 {
        3600 // 1 hour
    }

    fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: env_required("JWT_SECRET")?,
            access_token_expiry: env_or("JWT_ACCESS_TOKEN_EXPIRY", Self::default_expiry()),
        })
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "RateLimitConfig::default_rps")]
    pub requests_per_second: u32,
    #[serde(default = "RateLimitConfig::default_burst")]
    pub burst: u32,
}

impl RateLimitConfig {
    fn default_rps() -> u32 {
        10
    }

    fn default_burst() -> u32 {
        50
    }

    fn load() -> Self {
        Self {
            requests_per_second: env_or("RATE_LIMIT_REQUESTS_PER_SECOND", Self::default_rps()),
            burst: env_or("RATE_LIMIT_BURST", Self::default_burst()),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    fn load() -> Self {
        Self {
            allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                .unwrap_or_default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
}
