//! Running several solvers on one instance.
//!
//! This is the layer that owns input-size policy: the exact solver is
//! skipped when an instance has more items than
//! [`CompareConfig::exact_item_limit`].

use crate::error::ConfigError;
use crate::exact::ExactRunner;
use crate::greedy::GreedyRunner;
use crate::local::{HillClimbingConfig, HillClimbingRunner};
use crate::model::Instance;
use crate::solution::{Algorithm, SolveResult};
use log::info;

/// Runs a single algorithm.
///
/// `hill_climbing` is only read for [`Algorithm::HillClimbing`], and only
/// then can this fail.
pub fn solve(
    algorithm: Algorithm,
    instance: &Instance,
    hill_climbing: &HillClimbingConfig,
) -> Result<SolveResult, ConfigError> {
    match algorithm {
        Algorithm::Exact => Ok(ExactRunner::run(instance)),
        Algorithm::Greedy => Ok(GreedyRunner::run(instance)),
        Algorithm::HillClimbing => HillClimbingRunner::run(instance, hill_climbing),
    }
}

/// Configuration for [`compare`].
///
/// # Examples
///
/// ```
/// use mule_balance::compare::CompareConfig;
/// use mule_balance::solution::Algorithm;
///
/// let config = CompareConfig::default()
///     .with_algorithms(vec![Algorithm::Greedy, Algorithm::HillClimbing])
///     .with_exact_item_limit(10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompareConfig {
    /// Largest item count the exact solver is started on.
    pub exact_item_limit: usize,

    pub hill_climbing: HillClimbingConfig,

    /// Algorithms to run, in reporting order.
    pub algorithms: Vec<Algorithm>,

    /// Run the algorithms concurrently. Needs the `parallel` feature;
    /// ignored otherwise.
    pub parallel: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            exact_item_limit: 12,
            hill_climbing: HillClimbingConfig::default(),
            algorithms: Algorithm::ALL.to_vec(),
            parallel: false,
        }
    }
}

impl CompareConfig {
    pub fn with_exact_item_limit(mut self, n: usize) -> Self {
        self.exact_item_limit = n;
        self
    }

    pub fn with_hill_climbing(mut self, config: HillClimbingConfig) -> Self {
        self.hill_climbing = config;
        self
    }

    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.algorithms.is_empty() {
            return Err(ConfigError::NotPositive("number of algorithms"));
        }
        self.hill_climbing.validate()
    }
}

/// Outcome for one algorithm in a [`Comparison`].
#[derive(Debug, Clone)]
pub enum ComparisonEntry {
    Ran(SolveResult),
    Skipped {
        algorithm: Algorithm,
        reason: String,
    },
}

impl ComparisonEntry {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            ComparisonEntry::Ran(r) => r.algorithm,
            ComparisonEntry::Skipped { algorithm, .. } => *algorithm,
        }
    }

    pub fn result(&self) -> Option<&SolveResult> {
        match self {
            ComparisonEntry::Ran(r) => Some(r),
            ComparisonEntry::Skipped { .. } => None,
        }
    }
}

/// Results of [`compare`], in the configured algorithm order.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub entries: Vec<ComparisonEntry>,
}

impl Comparison {
    /// Result of `algorithm`, if it ran.
    pub fn get(&self, algorithm: Algorithm) -> Option<&SolveResult> {
        self.entries
            .iter()
            .filter_map(ComparisonEntry::result)
            .find(|r| r.algorithm == algorithm)
    }

    /// Feasible result with the smallest spread. Earlier entries win ties.
    pub fn best(&self) -> Option<&SolveResult> {
        let mut best: Option<&SolveResult> = None;
        for r in self.entries.iter().filter_map(ComparisonEntry::result) {
            if r.is_feasible() && best.is_none_or(|b| r.spread < b.spread) {
                best = Some(r);
            }
        }
        best
    }
}

/// Runs every configured algorithm on `instance`.
///
/// # Examples
///
/// ```
/// use mule_balance::compare::{compare, CompareConfig};
/// use mule_balance::instance::cases;
/// use mule_balance::solution::Algorithm;
///
/// let case = cases::case("1").unwrap();
/// let comparison = compare(&case.instance, &CompareConfig::default()).unwrap();
/// let best = comparison.best().unwrap();
/// assert_eq!(best.algorithm, Algorithm::Exact);
/// ```
pub fn compare(instance: &Instance, config: &CompareConfig) -> Result<Comparison, ConfigError> {
    config.validate()?;

    let run = |algorithm: Algorithm| -> Result<ComparisonEntry, ConfigError> {
        if algorithm == Algorithm::Exact && instance.num_items() > config.exact_item_limit {
            info!(
                "compare: skipping exact solver, {} items > limit {}",
                instance.num_items(),
                config.exact_item_limit
            );
            return Ok(ComparisonEntry::Skipped {
                algorithm,
                reason: format!(
                    "{} items exceed the exact solver limit of {}",
                    instance.num_items(),
                    config.exact_item_limit
                ),
            });
        }
        solve(algorithm, instance, &config.hill_climbing).map(ComparisonEntry::Ran)
    };

    let entries = if config.parallel {
        run_parallel(&config.algorithms, run)?
    } else {
        config
            .algorithms
            .iter()
            .map(|&a| run(a))
            .collect::<Result<Vec<_>, _>>()?
    };
    Ok(Comparison { entries })
}

#[cfg(feature = "parallel")]
fn run_parallel<F>(algorithms: &[Algorithm], run: F) -> Result<Vec<ComparisonEntry>, ConfigError>
where
    F: Fn(Algorithm) -> Result<ComparisonEntry, ConfigError> + Sync,
{
    use rayon::prelude::*;
    algorithms.par_iter().map(|&a| run(a)).collect()
}

#[cfg(not(feature = "parallel"))]
fn run_parallel<F>(algorithms: &[Algorithm], run: F) -> Result<Vec<ComparisonEntry>, ConfigError>
where
    F: Fn(Algorithm) -> Result<ComparisonEntry, ConfigError>,
{
    log::debug!("compare: `parallel` feature disabled, running sequentially");
    algorithms.iter().map(|&a| run(a)).collect()
}
