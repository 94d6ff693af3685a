//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::ChillogConfig;
use crate::config::validation::validate_config;
use crate::config::ConfigError;

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ChillogConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<ChillogConfig, ConfigError> {
    let config: ChillogConfig = toml::from_str(content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::debug!(
        host_var = %config.host_var,
        service_var = %config.service_var,
        resolve_hostname = config.resolve_hostname,
        "Configuration loaded"
    );

    Ok(config)
}
