//! Configuration file loading and parsing

use crate::config::validation::validate_config;
use crate::config::Config;
use crate::ConfigResult;
use std::fs;
use std::path::Path;

/// Loads a configuration file from disk, parses it, and validates it
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Parsed and validated configuration
/// * `Err(ConfigError)` - File could not be read, parsed, or validated
pub fn load_config(path: &Path) -> ConfigResult<Config> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parses a configuration from a TOML string and validates it
pub fn parse_config(contents: &str) -> ConfigResult<Config> {
    let config: Config = toml::from_str(contents)?;
    validate_config(&config)?;
    Ok(config)
}
