//! Random instance generation.

use super::config::{CapacityMode, GeneratorConfig};
use crate::error::GenerateError;
use crate::model::{ContainerTemplate, Instance, Item};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws a random instance with item ids `0..num_items` and container ids
/// `0..num_containers`.
///
/// # Examples
///
/// ```
/// use mule_balance::instance::{generate, GeneratorConfig};
///
/// let config = GeneratorConfig::default().with_num_items(6).with_seed(1);
/// let a = generate(&config).unwrap();
/// let b = generate(&config).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn generate(config: &GeneratorConfig) -> Result<Instance, GenerateError> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let (w_min, w_max) = config.weight_range;
    let (v_min, v_max) = config.value_range;
    let items = (0..config.num_items)
        .map(|id| {
            let w = rng.random_range(w_min..=w_max);
            let v = rng.random_range(v_min..=v_max);
            Item::new(id, f64::from(w), f64::from(v))
        })
        .collect();

    let auto = auto_capacity(config);
    let templates = (0..config.num_containers)
        .map(|id| {
            let capacity = match &config.capacity {
                CapacityMode::Fixed(c) => f64::from(*c),
                CapacityMode::Range(lo, hi) => f64::from(rng.random_range(*lo..=*hi)),
                CapacityMode::Custom(caps) => caps.get(id).map_or(auto, |&c| f64::from(c)),
                CapacityMode::Auto => auto,
            };
            ContainerTemplate::new(id, capacity)
        })
        .collect();

    Ok(Instance::new(items, templates)?)
}

fn auto_capacity(config: &GeneratorConfig) -> f64 {
    let (w_min, w_max) = config.weight_range;
    let mean_weight = (f64::from(w_min) + f64::from(w_max)) / 2.0;
    (mean_weight * config.num_items as f64 / config.num_containers as f64 * 1.2).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_ranges_respected() {
        let config = GeneratorConfig::default()
            .with_num_items(200)
            .with_weight_range(3, 7)
            .with_value_range(10, 12)
            .with_capacity(CapacityMode::Range(40, 60))
            .with_num_containers(20)
            .with_seed(42);
        let inst = generate(&config).unwrap();

        assert_eq!(inst.num_items(), 200);
        assert_eq!(inst.num_containers(), 20);
        for it in inst.items() {
            assert!((3.0..=7.0).contains(&it.weight));
            assert!((10.0..=12.0).contains(&it.value));
            assert_eq!(it.weight.fract(), 0.0);
        }
        for t in inst.templates() {
            assert!((40.0..=60.0).contains(&t.capacity));
        }
    }

    #[test]
    fn test_fixed_capacity() {
        let config = GeneratorConfig::default()
            .with_capacity(CapacityMode::Fixed(50))
            .with_seed(3);
        let inst = generate(&config).unwrap();
        assert!(inst.templates().iter().all(|t| t.capacity == 50.0));
    }

    #[test]
    fn test_auto_capacity() {
        // mean weight 5.5, 12 items over 3 containers: 5.5 * 12 / 3 * 1.2 = 26.4
        let config = GeneratorConfig::default().with_num_items(12).with_seed(3);
        let inst = generate(&config).unwrap();
        assert!(inst.templates().iter().all(|t| t.capacity == 26.0));
    }

    #[test]
    fn test_custom_capacity_falls_back_to_auto() {
        let config = GeneratorConfig::default()
            .with_num_items(12)
            .with_capacity(CapacityMode::Custom(vec![15, 35]))
            .with_seed(3);
        let inst = generate(&config).unwrap();
        let caps: Vec<f64> = inst.templates().iter().map(|t| t.capacity).collect();
        assert_eq!(caps, vec![15.0, 35.0, 26.0]);
    }

    #[test]
    fn test_seed_reproducible() {
        let config = GeneratorConfig::default().with_seed(99);
        assert_eq!(generate(&config).unwrap(), generate(&config).unwrap());
    }

    #[test]
    fn test_invalid_config() {
        let config = GeneratorConfig::default().with_num_containers(0);
        assert_eq!(
            generate(&config),
            Err(GenerateError::Config(ConfigError::NotPositive(
                "num_containers"
            )))
        );
    }
}
