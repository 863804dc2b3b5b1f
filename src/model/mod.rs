//! Entity model: items, containers and validated problem instances.
//!
//! An [`Instance`] owns the immutable inputs of a solve. Every solver takes
//! its own [`Instance::working_set`] of empty [`Container`]s built from the
//! instance's [`ContainerTemplate`]s, so solves never observe each other's
//! mutations.

mod container;
mod instance;
mod item;

pub use container::{Container, ContainerId, ContainerTemplate};
pub use instance::Instance;
pub use item::{Item, ItemId};
