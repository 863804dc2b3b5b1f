//! Error types.
//!
//! Infeasibility is not an error: a solver that cannot place every item
//! returns [`SolveStatus::Infeasible`](crate::solution::SolveStatus).
//! The types here cover malformed input, rejected container mutations and
//! invalid configurations.

use crate::model::{ContainerId, ItemId};
use thiserror::Error;

/// A rejected [`Container`](crate::model::Container) mutation.
///
/// The container is left unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContainerError {
    #[error("item {item} does not fit into container {container} (load {load} + {weight} > capacity {capacity})")]
    CapacityExceeded {
        container: ContainerId,
        item: ItemId,
        load: f64,
        weight: f64,
        capacity: f64,
    },

    #[error("item {item} is not assigned to container {container}")]
    ItemNotFound { container: ContainerId, item: ItemId },
}

/// Malformed solver input, detected before any solve begins.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InstanceError {
    #[error("item {id} has invalid weight {weight}")]
    NegativeWeight { id: ItemId, weight: f64 },

    #[error("item {id} has invalid value {value}")]
    NegativeValue { id: ItemId, value: f64 },

    #[error("container {id} has invalid capacity {capacity}")]
    NegativeCapacity { id: ContainerId, capacity: f64 },

    #[error("duplicate item id {0}")]
    DuplicateItemId(ItemId),

    #[error("duplicate container id {0}")]
    DuplicateContainerId(ContainerId),
}

/// An invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be positive")]
    NotPositive(&'static str),

    #[error("{name} range is inverted: {min} > {max}")]
    InvertedRange {
        name: &'static str,
        min: u32,
        max: u32,
    },
}

/// Failure to build a random instance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Instance(#[from] InstanceError),
}
