//! Random instance configuration.

use crate::error::ConfigError;

/// How container capacities are chosen.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CapacityMode {
    /// Same capacity for every container.
    Fixed(u32),

    /// Uniform integer capacity in `[min, max]`, drawn per container.
    Range(u32, u32),

    /// Explicit per-container capacities. Containers beyond the end of the
    /// list fall back to [`CapacityMode::Auto`].
    Custom(Vec<u32>),

    /// `floor(mean_weight * num_items / num_containers * 1.2)`, where
    /// `mean_weight` is the midpoint of the weight range: roughly 20% slack
    /// over an even split.
    #[default]
    Auto,
}

/// Configuration for [`generate`](super::generate).
///
/// # Examples
///
/// ```
/// use mule_balance::instance::{CapacityMode, GeneratorConfig};
///
/// let config = GeneratorConfig::default()
///     .with_num_items(8)
///     .with_num_containers(3)
///     .with_weight_range(1, 10)
///     .with_capacity(CapacityMode::Fixed(50))
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    pub num_items: usize,
    pub num_containers: usize,

    /// Inclusive item weight range.
    pub weight_range: (u32, u32),

    /// Inclusive item value range.
    pub value_range: (u32, u32),

    pub capacity: CapacityMode,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_items: 10,
            num_containers: 3,
            weight_range: (1, 10),
            value_range: (10, 50),
            capacity: CapacityMode::default(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_num_items(mut self, n: usize) -> Self {
        self.num_items = n;
        self
    }

    pub fn with_num_containers(mut self, m: usize) -> Self {
        self.num_containers = m;
        self
    }

    pub fn with_weight_range(mut self, min: u32, max: u32) -> Self {
        self.weight_range = (min, max);
        self
    }

    pub fn with_value_range(mut self, min: u32, max: u32) -> Self {
        self.value_range = (min, max);
        self
    }

    pub fn with_capacity(mut self, capacity: CapacityMode) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_containers == 0 {
            return Err(ConfigError::NotPositive("num_containers"));
        }
        check_range("weight", self.weight_range)?;
        check_range("value", self.value_range)?;
        if let CapacityMode::Range(min, max) = self.capacity {
            check_range("capacity", (min, max))?;
        }
        Ok(())
    }
}

fn check_range(name: &'static str, (min, max): (u32, u32)) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvertedRange { name, min, max });
    }
    Ok(())
}
