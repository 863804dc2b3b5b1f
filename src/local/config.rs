//! Hill climbing configuration.

use crate::error::ConfigError;

/// Configuration for [`HillClimbingRunner`](super::HillClimbingRunner).
///
/// # Examples
///
/// ```
/// use mule_balance::local::HillClimbingConfig;
///
/// let config = HillClimbingConfig::default().with_max_iterations(250);
/// assert_eq!(config.max_iterations, 250);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbingConfig {
    /// Upper bound on improvement iterations. Hitting it is not a failure:
    /// the current assignment is returned.
    pub max_iterations: usize,
}

impl Default for HillClimbingConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
        }
    }
}

impl HillClimbingConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::NotPositive("max_iterations"));
        }
        Ok(())
    }
}
