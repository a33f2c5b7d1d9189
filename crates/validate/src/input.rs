use std::sync::Arc;

use keystone_formulas::FormulaCatalog;
use keystone_graph::SimulationStructure;
use keystone_registry::{ParamRegistry, RegistrySnapshot};

/// Frozen data a validation pass runs over.
///
/// Owning the snapshot and catalog copy means producers may keep writing to the live registry
/// while a pass is in progress without affecting it.
#[derive(Debug, Clone)]
pub struct ValidationInput {
	pub registry: Arc<RegistrySnapshot>,
	pub formulas: FormulaCatalog,
	pub structure: SimulationStructure,
}

impl ValidationInput {
	pub fn new(registry: Arc<RegistrySnapshot>, formulas: FormulaCatalog, structure: SimulationStructure) -> Self {
		Self {
			registry,
			formulas,
			structure,
		}
	}

	/// Freezes the current state of a live registry and catalog.
	pub fn capture(registry: &ParamRegistry, formulas: &FormulaCatalog, structure: SimulationStructure) -> Self {
		Self::new(registry.snapshot(), formulas.clone(), structure)
	}
}
