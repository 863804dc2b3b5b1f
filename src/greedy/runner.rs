//! Greedy construction.

use crate::model::{Container, Instance, Item};
use crate::objective::spread;
use crate::solution::{Algorithm, SolveResult};
use log::{debug, info};
use std::time::Instant;

/// Single-pass greedy solver.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Builds one assignment.
    ///
    /// # Examples
    ///
    /// ```
    /// use mule_balance::greedy::GreedyRunner;
    /// use mule_balance::model::Instance;
    ///
    /// let instance = Instance::from_pairs(&[(1.0, 7.0), (1.0, 4.0), (1.0, 3.0)], &[5.0, 5.0]).unwrap();
    /// let result = GreedyRunner::run(&instance);
    /// assert_eq!(result.spread, 0.0);
    /// ```
    pub fn run(instance: &Instance) -> SolveResult {
        let start = Instant::now();
        let result = match construct(instance) {
            Some(containers) => {
                let s = spread(&containers);
                SolveResult::solved(Algorithm::Greedy, containers, s, start.elapsed(), 1)
            }
            None => SolveResult::infeasible(Algorithm::Greedy, start.elapsed(), 0),
        };
        info!(
            "greedy: {:?}, spread {} in {:?}",
            result.status, result.spread, result.elapsed
        );
        result
    }
}

/// Greedy assignment on a fresh working set, `None` if some item fits
/// nowhere.
pub(crate) fn construct(instance: &Instance) -> Option<Vec<Container>> {
    let mut order: Vec<&Item> = instance.items().iter().collect();
    // stable: equal values keep input order
    order.sort_by(|a, b| b.value.total_cmp(&a.value));

    let mut containers = instance.working_set();
    for item in order {
        let Some(target) = least_valued_fit(&containers, item) else {
            debug!("greedy: item {} fits in no container", item.id);
            return None;
        };
        containers[target].add_item(*item).ok()?;
    }
    Some(containers)
}

/// Index of the container with the smallest current value among those
/// that can take `item`. The first one in container order wins ties.
fn least_valued_fit(containers: &[Container], item: &Item) -> Option<usize> {
    let mut target: Option<usize> = None;
    for (idx, c) in containers.iter().enumerate() {
        if !c.fits(item) {
            continue;
        }
        if target.is_none_or(|t| c.current_value() < containers[t].current_value()) {
            target = Some(idx);
        }
    }
    target
}
