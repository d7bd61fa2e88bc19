use serde::{Deserialize, Serialize};

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverSection;
use super::server::ServerConfig;
use crate::resolver_config::ResolutionMode;

const LOCAL_CONFIG_PATH: &str = "rootwalk.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/rootwalk/config.toml";

/// Main configuration structure for rootwalk
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listening address of the local DNS endpoint
    #[serde(default)]
    pub server: ServerConfig,

    /// Iterative resolution and fallback settings
    #[serde(default)]
    pub resolver: ResolverSection,

    /// Response cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. rootwalk.toml in current directory
    /// 3. /etc/rootwalk/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(found) = Self::get_config_path() {
            Self::from_file(&found)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(mode) = overrides.mode {
            self.resolver.mode = mode;
        }
        if let Some(resolver) = overrides.public_resolver {
            self.resolver.public_resolver = resolver;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        let roots = self.resolver.root_server_set()?;
        if roots.is_empty() {
            return Err(ConfigError::Validation(
                "No root servers configured".to_string(),
            ));
        }

        if self.resolver.max_hops == 0 {
            return Err(ConfigError::Validation(
                "max_hops must be at least 1".to_string(),
            ));
        }

        if self.resolver.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "query_timeout must be greater than 0".to_string(),
            ));
        }

        self.resolver.public_resolver_addr()?;

        if !self.logging.has_valid_level() {
            return Err(ConfigError::Validation(format!(
                "Invalid log level '{}'",
                self.logging.level
            )));
        }

        if self.cache.ttl == 0 {
            return Err(ConfigError::Validation(
                "cache ttl must be greater than 0".to_string(),
            ));
        }

        if self.cache.sweep_interval == 0 {
            return Err(ConfigError::Validation(
                "cache sweep_interval must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
    pub mode: Option<ResolutionMode>,
    pub public_resolver: Option<String>,
}
