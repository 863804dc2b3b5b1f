//! Greedy constructive heuristic.
//!
//! Items are taken by descending value and each goes to the feasible
//! container currently holding the least value. The first item that fits
//! nowhere makes the whole run infeasible. Its output also seeds
//! [hill climbing](crate::local).

mod runner;

pub use runner::GreedyRunner;
pub(crate) use runner::construct;
