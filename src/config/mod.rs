//! # Application configuration
//!
//! Loaded from a TOML file (path in `GYM_API_CONFIG`, default `config.toml`
//! when present) with environment-variable overrides for the settings that
//! differ between deployments.

use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address.
    pub bind_address: String,
    /// Listen port.
    pub port: u16,
    /// Whether to add the CORS layer.
    pub enable_cors: bool,
    /// Allowed CORS origins; `*` allows any.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8000,
            enable_cors: true,
            cors_origins: vec!["*".to_string()],
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection URL, e.g. `sqlite://data/gym.db`.
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://data/gym.db".to_string(),
        }
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret.
    pub jwt_secret: String,
    /// Access token lifetime in seconds.
    pub token_expires_in: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "insecure-dev-secret-change-me".to_string(),
            token_expires_in: 86_400,
        }
    }
}

/// Application main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration: file (when present), then environment overrides.
    pub fn load() -> Result<Self> {
        let path = env::var("GYM_API_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        let mut config = if Path::new(&path).exists() {
            let raw = std::fs::read_to_string(&path).map_err(|e| AppError::Config {
                message: format!("failed to read config file {path}: {e}"),
                source: Some(e.into()),
            })?;
            toml::from_str(&raw).map_err(|e| AppError::Config {
                message: format!("failed to parse config file {path}: {e}"),
                source: Some(e.into()),
            })?
        } else {
            Self::default()
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(url) = env::var("DATABASE_URL") {
            self.database.url = url;
        }
        if let Ok(secret) = env::var("GYM_API_JWT_SECRET") {
            self.auth.jwt_secret = secret;
        }
        if let Ok(port) = env::var("GYM_API_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| AppError::config(format!("invalid GYM_API_PORT '{port}': {e}")))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8000);
        assert!(config.database.url.starts_with("sqlite://"));
        assert_eq!(config.auth.token_expires_in, 86_400);
    }

    #[test]
    fn test_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            port = 9000

            [auth]
            jwt_secret = "s3cret"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.auth.jwt_secret, "s3cret");
        // untouched sections fall back to defaults
        assert_eq!(config.database.url, "sqlite://data/gym.db");
    }
}
