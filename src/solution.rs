//! Result record returned by every solver.

use crate::model::{Container, ContainerId, ItemId};
use std::fmt;
use std::time::Duration;

/// The solvers provided by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Exhaustive enumeration, see [`ExactRunner`](crate::exact::ExactRunner).
    Exact,
    /// Single-pass constructive heuristic, see [`GreedyRunner`](crate::greedy::GreedyRunner).
    Greedy,
    /// Greedy followed by move/swap hill climbing, see
    /// [`HillClimbingRunner`](crate::local::HillClimbingRunner).
    HillClimbing,
}

impl Algorithm {
    /// All algorithms in reporting order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Exact, Algorithm::Greedy, Algorithm::HillClimbing];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Exact => "exact",
            Algorithm::Greedy => "greedy",
            Algorithm::HillClimbing => "hill-climbing",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveStatus {
    /// Every item was placed within capacity.
    Solved,
    /// No feasible assignment was found.
    Infeasible,
}

/// Result of one solver invocation.
///
/// Results are all-or-nothing: an infeasible result carries no containers
/// and a spread of `f64::INFINITY`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult {
    /// Solver that produced this result.
    pub algorithm: Algorithm,

    pub status: SolveStatus,

    /// Final containers in template order, `None` when infeasible.
    pub containers: Option<Vec<Container>>,

    /// Spread of the final containers, `f64::INFINITY` when infeasible.
    pub spread: f64,

    /// Wall-clock time of the invocation.
    pub elapsed: Duration,

    /// Number of spread evaluations performed. Independent of wall-clock
    /// time, so comparable across machines.
    pub evaluations: usize,

    /// Hill-climbing iterations (0 for the other solvers).
    pub iterations: usize,
}

impl SolveResult {
    pub(crate) fn solved(
        algorithm: Algorithm,
        containers: Vec<Container>,
        spread: f64,
        elapsed: Duration,
        evaluations: usize,
    ) -> Self {
        Self {
            algorithm,
            status: SolveStatus::Solved,
            containers: Some(containers),
            spread,
            elapsed,
            evaluations,
            iterations: 0,
        }
    }

    pub(crate) fn infeasible(algorithm: Algorithm, elapsed: Duration, evaluations: usize) -> Self {
        Self {
            algorithm,
            status: SolveStatus::Infeasible,
            containers: None,
            spread: f64::INFINITY,
            elapsed,
            evaluations,
            iterations: 0,
        }
    }

    pub fn is_feasible(&self) -> bool {
        self.status == SolveStatus::Solved
    }

    /// Sum of assigned values, `None` when infeasible.
    pub fn total_value(&self) -> Option<f64> {
        self.containers
            .as_ref()
            .map(|cs| cs.iter().map(Container::current_value).sum())
    }

    /// Sum of assigned weights, `None` when infeasible.
    pub fn total_weight(&self) -> Option<f64> {
        self.containers
            .as_ref()
            .map(|cs| cs.iter().map(Container::current_weight).sum())
    }

    /// `(item, container)` pairs in container order, then assignment order.
    pub fn assignment(&self) -> Vec<(ItemId, ContainerId)> {
        self.containers
            .iter()
            .flatten()
            .flat_map(|c| c.items().iter().map(move |it| (it.id, c.id())))
            .collect()
    }
}
