//! Exact solver by exhaustive enumeration.
//!
//! Enumerates all `M^N` functions from items to containers and keeps the
//! feasible one with the smallest spread. Exponential: callers decide
//! whether an instance is small enough (see
//! [`CompareConfig::exact_item_limit`](crate::compare::CompareConfig)).

mod runner;

pub use runner::ExactRunner;
