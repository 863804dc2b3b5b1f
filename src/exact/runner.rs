//! Enumeration loop.
//!
//! # Algorithm
//!
//! 1. Start from the all-zeros assignment (every item in the first container)
//! 2. For each assignment, in lexicographic order over item index with the
//!    last item varying fastest:
//!    a. Reset the working containers
//!    b. Place items in input order; abandon on the first capacity failure
//!    c. If every item fits, evaluate the spread and keep it if strictly
//!       better than the best so far (first found wins on ties)
//! 3. Report the best assignment, or infeasibility if none fit

use crate::model::{Container, Instance, Item};
use crate::objective::spread;
use crate::solution::{Algorithm, SolveResult};
use log::{debug, info};
use std::time::Instant;

/// Exhaustive enumeration solver.
pub struct ExactRunner;

impl ExactRunner {
    /// Runs the enumeration to completion.
    ///
    /// # Examples
    ///
    /// ```
    /// use mule_balance::exact::ExactRunner;
    /// use mule_balance::model::Instance;
    ///
    /// let instance = Instance::from_pairs(&[(10.0, 10.0); 4], &[20.0, 20.0]).unwrap();
    /// let result = ExactRunner::run(&instance);
    /// assert_eq!(result.spread, 0.0);
    /// ```
    pub fn run(instance: &Instance) -> SolveResult {
        let start = Instant::now();
        let items = instance.items();
        let num_containers = instance.num_containers();

        if num_containers == 0 && !items.is_empty() {
            info!("exact: {} items but no containers, infeasible", items.len());
            return SolveResult::infeasible(Algorithm::Exact, start.elapsed(), 0);
        }

        let mut digits = vec![0usize; items.len()];
        let mut working = instance.working_set();
        let mut best: Option<Vec<Container>> = None;
        let mut best_spread = f64::INFINITY;
        let mut candidates = 0usize;
        let mut evaluations = 0usize;

        loop {
            candidates += 1;
            for c in &mut working {
                c.clear();
            }

            if place(&mut working, items, &digits) {
                let s = spread(&working);
                evaluations += 1;
                if s < best_spread {
                    debug!("exact: new best spread {s} at candidate {candidates}");
                    best_spread = s;
                    best = Some(working.clone());
                }
            }

            if !advance(&mut digits, num_containers) {
                break;
            }
        }

        let elapsed = start.elapsed();
        match best {
            Some(containers) => {
                info!(
                    "exact: spread {best_spread} after {candidates} candidates ({evaluations} feasible) in {elapsed:?}"
                );
                SolveResult::solved(Algorithm::Exact, containers, best_spread, elapsed, evaluations)
            }
            None => {
                info!("exact: none of {candidates} candidates feasible ({elapsed:?})");
                SolveResult::infeasible(Algorithm::Exact, elapsed, evaluations)
            }
        }
    }
}

/// Places `items[i]` into `working[digits[i]]` in item order.
///
/// Returns `false` at the first item that does not fit.
fn place(working: &mut [Container], items: &[Item], digits: &[usize]) -> bool {
    items
        .iter()
        .zip(digits)
        .all(|(item, &k)| working[k].add_item(*item).is_ok())
}

/// Steps `digits` to the next assignment in base `base`, last digit
/// fastest. Returns `false` once every assignment has been visited.
fn advance(digits: &mut [usize], base: usize) -> bool {
    for d in digits.iter_mut().rev() {
        *d += 1;
        if *d < base {
            return true;
        }
        *d = 0;
    }
    false
}
