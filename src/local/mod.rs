//! Hill climbing on top of the greedy assignment.
//!
//! Each iteration looks only at the current most- and least-valued
//! containers. It first tries moving one item from the former to the
//! latter, then swapping one item from each, and accepts the first change
//! that strictly lowers the spread. The search stops at a local optimum or
//! after [`HillClimbingConfig::max_iterations`].

mod config;
mod runner;

pub use config::HillClimbingConfig;
pub use runner::HillClimbingRunner;
