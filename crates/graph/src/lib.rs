//! Phase and simulation data-flow description.
//!
//! The graph is supplied wholesale (usually from `simulation_structure.json`) and is read-only
//! afterwards. Construction validates structure; every accessor is pure.

mod error;
mod structure;

pub use error::GraphError;
pub use structure::{OrderGroup, Phase, Simulation, SimulationStructure};

#[cfg(test)]
mod tests;
