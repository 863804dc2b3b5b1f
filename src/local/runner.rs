//! Hill climbing execution loop.
//!
//! # Algorithm
//!
//! 1. Build the greedy assignment; if greedy fails, fail the same way
//! 2. At each iteration:
//!    a. Order containers by value (stable); take the first as `min`, the
//!       last as `max`
//!    b. **Move**: for each item of `max` in order, move it to `min` if it
//!       fits; keep the first move that strictly lowers the spread
//!    c. **Swap**: only if no move helped, try every (item of `max`, item
//!       of `min`) pair whose exchange fits; keep the first strict
//!       improvement
//!    d. Stop when neither phase improves
//! 3. Stop early once `max_iterations` is reached
//!
//! Rejected moves and swaps restore the prior container state, with each
//! reverted item moved to the back of its container, as if it had been
//! removed and added again.

use super::config::HillClimbingConfig;
use crate::error::ConfigError;
use crate::greedy;
use crate::model::{Container, Instance, Item, ItemId};
use crate::objective::spread;
use crate::solution::{Algorithm, SolveResult};
use log::{debug, info};
use std::time::Instant;

/// Greedy-seeded first-improvement hill climbing.
pub struct HillClimbingRunner;

impl HillClimbingRunner {
    /// Runs greedy construction followed by hill climbing.
    ///
    /// Fails only on an invalid `config`; an infeasible instance is an
    /// `Ok` result with [`SolveStatus::Infeasible`](crate::solution::SolveStatus).
    ///
    /// # Examples
    ///
    /// ```
    /// use mule_balance::local::{HillClimbingConfig, HillClimbingRunner};
    /// use mule_balance::model::Instance;
    ///
    /// let instance = Instance::from_pairs(
    ///     &[(1.0, 3.0), (1.0, 3.0), (1.0, 2.0), (1.0, 2.0), (1.0, 2.0)],
    ///     &[10.0, 10.0],
    /// ).unwrap();
    /// let result = HillClimbingRunner::run(&instance, &HillClimbingConfig::default()).unwrap();
    /// assert_eq!(result.spread, 0.0);
    /// ```
    pub fn run(
        instance: &Instance,
        config: &HillClimbingConfig,
    ) -> Result<SolveResult, ConfigError> {
        config.validate()?;
        let start = Instant::now();

        let Some(mut containers) = greedy::construct(instance) else {
            info!("hill-climbing: greedy start infeasible");
            return Ok(SolveResult::infeasible(
                Algorithm::HillClimbing,
                start.elapsed(),
                0,
            ));
        };

        let seed_spread = spread(&containers);
        let outcome = climb(&mut containers, seed_spread, config.max_iterations);
        let elapsed = start.elapsed();

        info!(
            "hill-climbing: spread {} -> {} in {} iterations ({:?})",
            seed_spread, outcome.spread, outcome.iterations, elapsed
        );

        let mut result = SolveResult::solved(
            Algorithm::HillClimbing,
            containers,
            outcome.spread,
            elapsed,
            outcome.evaluations + 1,
        );
        result.iterations = outcome.iterations;
        Ok(result)
    }
}

/// Outcome of [`climb`].
#[derive(Debug, Clone, Copy)]
struct Climb {
    spread: f64,
    iterations: usize,
    evaluations: usize,
}

/// Improves `containers` in place starting from spread `current`.
fn climb(containers: &mut [Container], mut current: f64, max_iterations: usize) -> Climb {
    let mut iterations = 0;
    let mut evaluations = 0;

    if containers.len() < 2 {
        return Climb {
            spread: current,
            iterations,
            evaluations,
        };
    }

    let mut improved = true;
    while improved && iterations < max_iterations {
        improved = false;
        iterations += 1;

        let (lo, hi) = extremes(containers);
        current = containers[hi].current_value() - containers[lo].current_value();

        if let Some(s) = improve_by_move(containers, hi, lo, current, &mut evaluations) {
            debug!("hill-climbing: iteration {iterations} move {current} -> {s}");
            current = s;
            improved = true;
            continue;
        }

        if let Some(s) = improve_by_swap(containers, hi, lo, current, &mut evaluations) {
            debug!("hill-climbing: iteration {iterations} swap {current} -> {s}");
            current = s;
            improved = true;
        }
    }

    Climb {
        spread: current,
        iterations,
        evaluations,
    }
}

/// `(min, max)` container indices after a stable ascending sort by value.
///
/// Among equal values the lowest index is `min` and the highest is `max`.
fn extremes(containers: &[Container]) -> (usize, usize) {
    let mut order: Vec<usize> = (0..containers.len()).collect();
    order.sort_by(|&a, &b| {
        containers[a]
            .current_value()
            .total_cmp(&containers[b].current_value())
    });
    (order[0], order[order.len() - 1])
}

/// First single-item move from `hi` to `lo` that strictly lowers the spread.
fn improve_by_move(
    containers: &mut [Container],
    hi: usize,
    lo: usize,
    current: f64,
    evaluations: &mut usize,
) -> Option<f64> {
    let candidates: Vec<Item> = containers[hi].items().to_vec();
    for item in candidates {
        let saved = Snapshot::take(containers, hi, lo);
        if !relocate(containers, hi, lo, item.id) {
            saved.restore(containers);
            continue;
        }
        let s = spread(containers);
        *evaluations += 1;
        if s < current {
            return Some(s);
        }
        saved.restore(containers);
        containers[hi].move_to_back(item.id);
    }
    None
}

/// First exchange between `hi` and `lo` that strictly lowers the spread.
///
/// Reverted exchanges reorder `lo`, so its items are re-read for every item
/// of `hi`.
fn improve_by_swap(
    containers: &mut [Container],
    hi: usize,
    lo: usize,
    current: f64,
    evaluations: &mut usize,
) -> Option<f64> {
    let heavy: Vec<Item> = containers[hi].items().to_vec();
    for a in &heavy {
        let light: Vec<Item> = containers[lo].items().to_vec();
        for b in &light {
            let saved = Snapshot::take(containers, hi, lo);
            if !exchange(containers, hi, lo, a.id, b.id) {
                saved.restore(containers);
                continue;
            }
            let s = spread(containers);
            *evaluations += 1;
            if s < current {
                return Some(s);
            }
            saved.restore(containers);
            containers[hi].move_to_back(a.id);
            containers[lo].move_to_back(b.id);
        }
    }
    None
}

/// The two containers touched by a tentative change, as they were before it.
///
/// Restoring puts back the exact prior totals, so an undo never depends on
/// re-checking capacity.
struct Snapshot {
    hi: usize,
    lo: usize,
    saved_hi: Container,
    saved_lo: Container,
}

impl Snapshot {
    fn take(containers: &[Container], hi: usize, lo: usize) -> Self {
        Self {
            hi,
            lo,
            saved_hi: containers[hi].clone(),
            saved_lo: containers[lo].clone(),
        }
    }

    fn restore(self, containers: &mut [Container]) {
        containers[self.hi] = self.saved_hi;
        containers[self.lo] = self.saved_lo;
    }
}

fn find(container: &Container, id: ItemId) -> Option<Item> {
    container.items().iter().find(|it| it.id == id).copied()
}

/// Moves item `id` from `containers[from]` to `containers[to]`.
///
/// Returns `false` and changes nothing if the item is missing or does not
/// fit.
fn relocate(containers: &mut [Container], from: usize, to: usize, id: ItemId) -> bool {
    let Some(item) = find(&containers[from], id) else {
        return false;
    };
    if from == to || !containers[to].fits(&item) {
        return false;
    }
    containers[from].remove_item(id).is_ok() && containers[to].add_item(item).is_ok()
}

/// Exchanges item `x` of `containers[p]` with item `y` of `containers[q]`.
///
/// Returns `false` and changes nothing if either item is missing or either
/// side would exceed its capacity after the exchange.
fn exchange(containers: &mut [Container], p: usize, q: usize, x: ItemId, y: ItemId) -> bool {
    if p == q {
        return false;
    }
    let (Some(a), Some(b)) = (find(&containers[p], x), find(&containers[q], y)) else {
        return false;
    };
    if !fits_after_exchange(&containers[p], &a, &b) || !fits_after_exchange(&containers[q], &b, &a)
    {
        return false;
    }
    // both removals precede the additions, matching the checks above
    containers[p].remove_item(x).is_ok()
        && containers[q].remove_item(y).is_ok()
        && containers[p].add_item(b).is_ok()
        && containers[q].add_item(a).is_ok()
}

fn fits_after_exchange(c: &Container, outgoing: &Item, incoming: &Item) -> bool {
    c.current_weight() - outgoing.weight + incoming.weight <= c.capacity()
}
