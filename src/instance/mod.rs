//! Instance construction: random generation and a library of fixed
//! scenarios.

pub mod cases;
mod config;
mod generator;

pub use cases::NamedInstance;
pub use config::{CapacityMode, GeneratorConfig};
pub use generator::generate;
