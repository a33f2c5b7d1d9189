use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::GraphError;

/// A unit of computation with declared parameter contracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simulation {
	pub name: String,
	#[serde(default)]
	pub inputs: Vec<String>,
	#[serde(default)]
	pub outputs: Vec<String>,
}

impl Simulation {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			inputs: Vec::new(),
			outputs: Vec::new(),
		}
	}

	pub fn with_inputs<I, S>(mut self, inputs: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.inputs = inputs.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_outputs<I, S>(mut self, outputs: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.outputs = outputs.into_iter().map(Into::into).collect();
		self
	}
}

/// An ordered pipeline stage. Outputs become available only once the whole stage completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
	pub name: String,
	pub order: i64,
	pub simulations: Vec<Simulation>,
}

impl Phase {
	pub fn new(name: impl Into<String>, order: i64, simulations: Vec<Simulation>) -> Self {
		Self {
			name: name.into(),
			order,
			simulations,
		}
	}
}

/// Phases sharing one `order` value; none of them sees the others' outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderGroup<'a> {
	pub order: i64,
	pub phases: Vec<&'a Phase>,
}

/// Validated phase/simulation graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStructure")]
pub struct SimulationStructure {
	phases: Vec<Phase>,
}

#[derive(Deserialize)]
struct RawStructure {
	phases: Vec<Phase>,
}

impl TryFrom<RawStructure> for SimulationStructure {
	type Error = GraphError;

	fn try_from(raw: RawStructure) -> Result<Self, Self::Error> {
		Self::new(raw.phases)
	}
}

impl SimulationStructure {
	/// Validates and wraps `phases`, keeping declaration order.
	pub fn new(phases: Vec<Phase>) -> Result<Self, GraphError> {
		for (index, phase) in phases.iter().enumerate() {
			if phase.name.trim().is_empty() {
				return Err(GraphError::EmptyPhaseName { index });
			}
			let mut seen = HashSet::new();
			for (index, sim) in phase.simulations.iter().enumerate() {
				if sim.name.trim().is_empty() {
					return Err(GraphError::EmptySimulationName {
						phase: phase.name.clone(),
						index,
					});
				}
				for (direction, paths) in [("inputs", &sim.inputs), ("outputs", &sim.outputs)] {
					if paths.iter().any(|p| p.trim().is_empty()) {
						return Err(GraphError::EmptyPath {
							phase: phase.name.clone(),
							simulation: sim.name.clone(),
							direction,
						});
					}
				}
				if !seen.insert(sim.name.as_str()) {
					warn!(phase = %phase.name, simulation = %sim.name, "simulation declared twice in one phase");
				}
			}
		}
		Ok(Self { phases })
	}

	/// Phases in declaration order.
	pub fn phases(&self) -> &[Phase] {
		&self.phases
	}

	pub fn is_empty(&self) -> bool {
		self.phases.is_empty()
	}

	/// Phases sorted ascending by `order`; ties keep declaration order.
	pub fn phases_in_order(&self) -> Vec<&Phase> {
		let mut sorted: Vec<&Phase> = self.phases.iter().collect();
		sorted.sort_by_key(|phase| phase.order);
		sorted
	}

	/// Phases bucketed by `order`, ascending.
	pub fn order_groups(&self) -> Vec<OrderGroup<'_>> {
		let mut groups: Vec<OrderGroup<'_>> = Vec::new();
		for phase in self.phases_in_order() {
			match groups.last_mut() {
				Some(group) if group.order == phase.order => group.phases.push(phase),
				_ => groups.push(OrderGroup {
					order: phase.order,
					phases: vec![phase],
				}),
			}
		}
		groups
	}

	/// Every `(phase, simulation)` pair in declaration order.
	pub fn simulations(&self) -> impl Iterator<Item = (&Phase, &Simulation)> + '_ {
		self.phases
			.iter()
			.flat_map(|phase| phase.simulations.iter().map(move |sim| (phase, sim)))
	}

	/// Union of all simulation outputs, regardless of phase order.
	pub fn global_outputs(&self) -> BTreeSet<&str> {
		self.simulations()
			.flat_map(|(_, sim)| sim.outputs.iter().map(String::as_str))
			.collect()
	}

	/// Simulations declaring `param` as an output.
	pub fn producers_of<'a>(&'a self, param: &'a str) -> impl Iterator<Item = (&'a Phase, &'a Simulation)> + 'a {
		self.simulations().filter(move |(_, sim)| sim.outputs.iter().any(|o| o == param))
	}
}
