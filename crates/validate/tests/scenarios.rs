//! End-to-end validation scenarios against the public API.

use keystone_formulas::{FormulaCatalog, FormulaEntry};
use keystone_graph::{Phase, Simulation, SimulationStructure};
use keystone_registry::ParamRegistry;
use keystone_validate::{Check, IssueKind, ValidationInput, ValidationOptions, validate};

fn topology_gauge(topology_order: i64, gauge_order: i64) -> SimulationStructure {
	SimulationStructure::new(vec![
		Phase::new(
			"Topology",
			topology_order,
			vec![Simulation::new("G2Geometry").with_outputs(["topology.b3"])],
		),
		Phase::new(
			"Gauge",
			gauge_order,
			vec![
				Simulation::new("Unification")
					.with_inputs(["topology.b3"])
					.with_outputs(["gauge.M_GUT"]),
			],
		),
	])
	.unwrap()
}

fn run(structure: SimulationStructure, formulas: FormulaCatalog, options: ValidationOptions) -> keystone_validate::ValidationOutcome {
	let registry = ParamRegistry::new();
	validate(ValidationInput::capture(&registry, &formulas, structure), options)
}

#[test]
fn scenario_a_ordered_phases_have_no_missing_inputs() {
	let outcome = run(topology_gauge(1, 2), FormulaCatalog::new(), ValidationOptions::default());
	assert_eq!(outcome.report.issues_for(Check::Order).count(), 0);
	assert!(!outcome.has_fatal_issues);
}

#[test]
fn scenario_b_swapped_orders_report_one_missing_input() {
	let outcome = run(topology_gauge(2, 1), FormulaCatalog::new(), ValidationOptions::default());
	let order: Vec<_> = outcome.report.issues_for(Check::Order).collect();

	assert_eq!(order.len(), 1);
	assert_eq!(order[0].kind, IssueKind::MissingInput);
	assert_eq!(order[0].phase.as_deref(), Some("Gauge"));
	assert_eq!(order[0].simulation.as_deref(), Some("Unification"));
	assert_eq!(order[0].params, vec!["topology.b3".to_string()]);
	assert!(outcome.has_fatal_issues);
}

#[test]
fn scenario_c_simulation_outputs_satisfy_formula_inputs() {
	let mut formulas = FormulaCatalog::new();
	formulas
		.add_formula(
			FormulaEntry::new("gut-scale").with_inputs(["gauge.M_GUT"]).with_outputs(["gut-scale"]),
			"gauge_unification",
		)
		.unwrap();

	let outcome = run(topology_gauge(1, 2), formulas, ValidationOptions::default());
	assert_eq!(outcome.report.issues_for(Check::Linkage).count(), 0);
}

#[test]
fn scenario_d_unproduced_key_parameter_is_reported() {
	let options = ValidationOptions::default().with_key_params(["topology.n_gen"]);
	let outcome = run(topology_gauge(1, 2), FormulaCatalog::new(), options);
	let completeness: Vec<_> = outcome.report.issues_for(Check::Completeness).collect();

	assert_eq!(completeness.len(), 1);
	assert_eq!(completeness[0].kind, IssueKind::MissingKeyParam);
	assert_eq!(completeness[0].params, vec!["topology.n_gen".to_string()]);
}

#[test]
fn report_serializes_to_json() {
	let options = ValidationOptions::default().with_key_params(["topology.n_gen"]);
	let outcome = run(topology_gauge(2, 1), FormulaCatalog::new(), options);

	let json = serde_json::to_value(&outcome).unwrap();
	assert_eq!(json["has_fatal_issues"], true);
	assert_eq!(json["report"]["summary"]["order_issues"], 1);
	assert_eq!(json["report"]["summary"]["completeness_issues"], 1);
	assert_eq!(json["report"]["issues"][0]["kind"], "missing_input");
	assert_eq!(json["report"]["issues"][1]["kind"], "missing_key_param");
	assert!(json["report"]["issues"][0].get("formula_id").is_none());
}
