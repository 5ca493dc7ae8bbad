//! # Name Service Configuration
//!
//! Runtime parameters for the Name Service. Every node in a network must run
//! with identical values; they feed query paths, fee routing and page
//! defaults.

use crate::domain::{DEFAULT_PAGE, DEFAULT_RESULTS_PER_PAGE};
use thiserror::Error;

/// Name of the module account that accumulates collected fees.
pub const FEE_COLLECTOR_NAME: &str = "fee_collector";

/// Default query route of the Name Service.
pub const MODULE_NAME: &str = "domain";

/// Name Service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameServiceConfig {
    /// First segment of every query path.
    pub module_name: String,
    /// Module account receiving fees.
    pub fee_collector: String,
    /// Page size when a query leaves it unset.
    pub default_results_per_page: usize,
    /// Page number when a query leaves it unset. 1-indexed.
    pub default_page: usize,
}

impl Default for NameServiceConfig {
    fn default() -> Self {
        Self {
            module_name: MODULE_NAME.to_string(),
            fee_collector: FEE_COLLECTOR_NAME.to_string(),
            default_results_per_page: DEFAULT_RESULTS_PER_PAGE,
            default_page: DEFAULT_PAGE,
        }
    }
}

impl NameServiceConfig {
    /// Validate configuration before the service is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.module_name.is_empty() || self.module_name.contains('/') {
            return Err(ConfigError::InvalidModuleName(self.module_name.clone()));
        }
        if self.fee_collector.is_empty() {
            return Err(ConfigError::EmptyFeeCollector);
        }
        if self.default_results_per_page == 0 {
            return Err(ConfigError::ZeroDefault("default_results_per_page"));
        }
        if self.default_page == 0 {
            return Err(ConfigError::ZeroDefault("default_page"));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Module name is empty or contains a path separator.
    #[error("Invalid module name: {0:?}")]
    InvalidModuleName(String),

    /// No fee collector module account configured.
    #[error("Fee collector module name is empty")]
    EmptyFeeCollector,

    /// A pagination default is zero.
    #[error("{0} must be at least 1")]
    ZeroDefault(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = NameServiceConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_results_per_page, 100);
        assert_eq!(config.default_page, 1);
        assert_eq!(config.fee_collector, "fee_collector");
    }

    #[test]
    fn test_module_name_with_separator_rejected() {
        let config = NameServiceConfig {
            module_name: "domain/extra".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidModuleName(_))
        ));
    }

    #[test]
    fn test_zero_default_page_rejected() {
        let config = NameServiceConfig {
            default_page: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroDefault("default_page"))
        );
    }

    #[test]
    fn test_empty_fee_collector_rejected() {
        let config = NameServiceConfig {
            fee_collector: String::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyFeeCollector));
    }
}
