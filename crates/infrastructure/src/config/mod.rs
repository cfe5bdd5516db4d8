//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//!
//! The upstream section reuses [`ZaragozaConfig`] as-is.

mod server;

use integration_zaragoza::ZaragozaConfig;
use serde::{Deserialize, Serialize};

pub use server::{LogFormat, ServerConfig};

/// Prefix for environment overrides (e.g. `ZGZTRANSIT_SERVER__PORT`)
pub const ENV_PREFIX: &str = "ZGZTRANSIT";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream open-data API configuration
    #[serde(default)]
    pub upstream: ZaragozaConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Sources, later ones winning: built-in defaults, `config.toml` in the
    /// working directory, then `ZGZTRANSIT_*` variables. Nested keys use a
    /// double underscore, e.g. `ZGZTRANSIT_UPSTREAM__MAX_ATTEMPTS=5`.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(config::File::with_name("config").required(false))
    }

    fn load_from<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.host.is_empty() {
            return Err("server.host must not be empty".to_string());
        }

        self.upstream
            .validate()
            .map_err(|e| format!("upstream: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> Result<AppConfig, config::ConfigError> {
        AppConfig::load_from(config::File::from_str(toml, config::FileFormat::Toml))
    }

    #[test]
    fn default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn invalid_upstream_is_reported() {
        let config = AppConfig {
            upstream: ZaragozaConfig {
                max_attempts: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.starts_with("upstream:"));
    }

    #[test]
    fn empty_host_is_rejected() {
        let config = AppConfig {
            server: ServerConfig {
                host: String::new(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn loads_empty_file_with_defaults() {
        let config = from_toml("").unwrap();
        assert_eq!(config.server, ServerConfig::default());
        assert_eq!(config.upstream, ZaragozaConfig::default());
    }

    #[test]
    fn loads_sections_from_file() {
        let config = from_toml(
            r#"
            [server]
            port = 8080
            log_format = "json"
            allowed_origins = ["https://example.org"]

            [upstream]
            base_url = "http://127.0.0.1:9000"
            max_attempts = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(config.server.allowed_origins, ["https://example.org"]);
        assert_eq!(config.upstream.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.upstream.max_attempts, 5);
        assert_eq!(config.upstream.timeout_secs, 10);
    }

    #[test]
    fn serialize_roundtrip() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
