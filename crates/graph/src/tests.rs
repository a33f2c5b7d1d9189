use pretty_assertions::assert_eq;

use crate::{GraphError, Phase, Simulation, SimulationStructure};

fn structure() -> SimulationStructure {
	SimulationStructure::new(vec![
		Phase::new(
			"Gauge",
			2,
			vec![Simulation::new("Unification").with_inputs(["topology.b3"]).with_outputs(["gauge.M_GUT"])],
		),
		Phase::new(
			"Topology",
			1,
			vec![Simulation::new("G2Geometry").with_outputs(["topology.b3", "topology.chi_eff"])],
		),
		Phase::new("Flavor", 2, vec![Simulation::new("PMNS").with_outputs(["pmns.theta_12"])]),
	])
	.unwrap()
}

#[test]
fn phases_sort_stably_by_order() {
	let s = structure();
	let names: Vec<_> = s.phases_in_order().iter().map(|p| p.name.as_str()).collect();
	assert_eq!(names, vec!["Topology", "Gauge", "Flavor"]);

	let groups = s.order_groups();
	assert_eq!(groups.len(), 2);
	assert_eq!(groups[0].order, 1);
	assert_eq!(
		groups[1].phases.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
		vec!["Gauge", "Flavor"]
	);
}

#[test]
fn global_outputs_ignore_order() {
	let s = structure();
	let outputs = s.global_outputs();
	assert_eq!(
		outputs.into_iter().collect::<Vec<_>>(),
		vec!["gauge.M_GUT", "pmns.theta_12", "topology.b3", "topology.chi_eff"]
	);
}

#[test]
fn producers_are_found_across_phases() {
	let s = structure();
	let producers: Vec<_> = s.producers_of("topology.b3").map(|(p, sim)| (p.name.as_str(), sim.name.as_str())).collect();
	assert_eq!(producers, vec![("Topology", "G2Geometry")]);
}

#[test]
fn deserialization_validates_structure() {
	let json = r#"{"phases": [{"name": "Topology", "order": 1, "simulations": [
		{"name": "G2Geometry", "outputs": ["topology.b3"]}
	]}]}"#;
	let parsed: SimulationStructure = serde_json::from_str(json).unwrap();
	assert_eq!(parsed.phases()[0].simulations[0].inputs, Vec::<String>::new());

	let empty_path = r#"{"phases": [{"name": "Topology", "order": 1, "simulations": [
		{"name": "G2Geometry", "outputs": [""]}
	]}]}"#;
	let err = serde_json::from_str::<SimulationStructure>(empty_path).unwrap_err();
	assert!(err.to_string().contains("empty parameter path"), "{err}");

	let missing_order = r#"{"phases": [{"name": "Topology", "simulations": []}]}"#;
	assert!(serde_json::from_str::<SimulationStructure>(missing_order).is_err());
}

#[test]
fn empty_names_are_rejected() {
	assert_eq!(
		SimulationStructure::new(vec![Phase::new(" ", 1, vec![])]),
		Err(GraphError::EmptyPhaseName { index: 0 })
	);
	assert_eq!(
		SimulationStructure::new(vec![Phase::new("Gauge", 1, vec![Simulation::new("")])]),
		Err(GraphError::EmptySimulationName {
			phase: "Gauge".into(),
			index: 0
		})
	);
}
