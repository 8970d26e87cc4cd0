//! Configuration management for the Health Advisor backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: HA__)

use anyhow::Result;
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub http: HttpClientConfig,
    pub directory: DirectoryConfig,
    pub advice: AdviceConfig,
    pub messaging: MessagingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Outbound HTTP client configuration
///
/// One timeout covers all three upstream services; none of them is expected
/// to take longer than a few seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpClientConfig {
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

/// Provider directory service configuration
///
/// The search parameters are fixed per deployment: the service always queries
/// the same specialty around the same coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    pub base_url: String,
    #[serde(serialize_with = "serialize_redacted")]
    pub api_key: Secret<String>,
    pub specialty: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: u32,
    pub skip: u32,
    pub limit: u32,
}

/// Generative advice service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceConfig {
    pub base_url: String,
    #[serde(serialize_with = "serialize_redacted")]
    pub api_key: Secret<String>,
    pub model: String,
    pub max_tokens: u32,
}

/// Messaging delivery service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagingConfig {
    pub base_url: String,
    pub account_sid: String,
    #[serde(serialize_with = "serialize_redacted")]
    pub auth_token: Secret<String>,
    pub from_number: String,
}

/// Serialize secrets as a fixed placeholder so config round-trips through the
/// `config` crate defaults without leaking credentials.
fn serialize_redacted<S>(_secret: &Secret<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str("")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            http: HttpClientConfig {
                timeout_secs: 10,
                connect_timeout_secs: 3,
            },
            directory: DirectoryConfig {
                base_url: "https://api.betterdoctor.com/2016-03-01".to_string(),
                api_key: Secret::new(String::new()),
                specialty: "dietitian".to_string(),
                latitude: 37.773,
                longitude: -122.413,
                radius_km: 100,
                skip: 0,
                limit: 10,
            },
            advice: AdviceConfig {
                base_url: "https://api.openai.com".to_string(),
                api_key: Secret::new(String::new()),
                model: "text-davinci-003".to_string(),
                max_tokens: 150,
            },
            messaging: MessagingConfig {
                base_url: "https://api.twilio.com/2010-04-01".to_string(),
                account_sid: String::new(),
                auth_token: Secret::new(String::new()),
                from_number: String::new(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with HA__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (HA__ prefix)
            // e.g., HA__SERVER__PORT=9000 sets server.port
            .add_source(config::Environment::with_prefix("HA").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.directory.specialty, "dietitian");
        assert_eq!(config.directory.limit, 10);
        assert_eq!(config.advice.max_tokens, 150);
        assert_eq!(config.http.timeout_secs, 10);
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }
}
