//! Configuration validation

use crate::config::Config;
use crate::{ConfigError, ConfigResult};

/// Validates a parsed configuration
///
/// # Rules
///
/// * `max-frontier-slots` must be at least 1
/// * `user-agent` must not be empty or whitespace
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    if config.crawler.max_frontier_slots == 0 {
        return Err(ConfigError::Validation(
            "max-frontier-slots must be at least 1".to_string(),
        ));
    }

    if config.crawler.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent must not be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CrawlerConfig;

    fn config_with(max_frontier_slots: usize, user_agent: &str) -> Config {
        Config {
            crawler: CrawlerConfig {
                max_frontier_slots,
                user_agent: user_agent.to_string(),
            },
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_slots_rejected() {
        let result = validate_config(&config_with(0, "bot/1.0"));
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_empty_user_agent_rejected() {
        let result = validate_config(&config_with(25, "   "));
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_single_slot_allowed() {
        assert!(validate_config(&config_with(1, "bot/1.0")).is_ok());
    }
}
