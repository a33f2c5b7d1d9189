/// Structural defects that make a simulation graph unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
	#[error("phase #{index} has an empty name")]
	EmptyPhaseName { index: usize },

	#[error("phase {phase:?}: simulation #{index} has an empty name")]
	EmptySimulationName { phase: String, index: usize },

	#[error("phase {phase:?}, simulation {simulation:?}: empty parameter path in {direction}")]
	EmptyPath {
		phase: String,
		simulation: String,
		direction: &'static str,
	},
}
