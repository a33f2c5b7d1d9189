use std::path::Path;

use keystone_formulas::FormulaCatalog;
use keystone_registry::{ParamRegistry, ParamValue, RegistryError, Status};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
	DocumentError, RegistryDocument, parse_registry_document, parse_structure_document, read_registry_document,
	write_registry_document,
};

const REGISTRY: &str = r#"{
	"parameters": {
		"topology": {
			"b3": {"value": 24, "status": "GEOMETRIC", "source": "GEOMETRIC:TCS_G2"},
			"chi_eff": {"value": 144, "status": "GEOMETRIC", "source": "GEOMETRIC:TCS_G2", "uncertainty": null}
		},
		"proton_decay": {
			"tau_p_years": {
				"value": 3.9e34,
				"status": "PREDICTED",
				"source": "sim_proton_decay",
				"uncertainty": 1.5e33,
				"metadata": {"bound_type": "lower"},
				"experimental_reference": "Super-K 2020"
			}
		}
	},
	"formulas": {
		"formulas": {
			"proton-lifetime": {
				"inputParams": ["gauge.M_GUT"],
				"outputParams": ["proton_decay.tau_p_years"],
				"relatedFormulas": ["gut-scale"],
				"label": "(7.1)",
				"plainText": "tau_p ~ M_GUT^4 / (alpha^2 m_p^5)",
				"simulationFile": "simulations/proton_decay.py"
			},
			"gut-scale": {"inputParams": [], "outputParams": ["gauge.M_GUT"]}
		}
	}
}"#;

fn origin() -> &'static Path {
	Path::new("theory_output.json")
}

#[test]
fn populate_loads_parameters_and_formulas() {
	let registry = ParamRegistry::new();
	let mut catalog = FormulaCatalog::new();
	let populated = parse_registry_document(REGISTRY, origin())
		.unwrap()
		.populate(&registry, &mut catalog, origin())
		.unwrap();

	assert_eq!((populated.parameters, populated.formulas), (3, 2));
	assert_eq!(registry.get_param("topology.b3").unwrap(), ParamValue::Integer(24));

	let tau = registry.get_entry("proton_decay.tau_p_years").unwrap();
	assert_eq!(tau.status, Status::Predicted);
	assert_eq!(tau.uncertainty, Some(1.5e33));
	assert_eq!(tau.metadata["bound_type"], "lower");
	assert_eq!(tau.metadata["experimental_reference"], "Super-K 2020");

	let formula = catalog.get("proton-lifetime").unwrap();
	assert_eq!(formula.simulation_file.as_deref(), Some("simulations/proton_decay.py"));
	assert_eq!(formula.related_formulas, vec!["gut-scale"]);
	assert_eq!(catalog.get("gut-scale").unwrap().simulation_file, None);
}

#[test]
fn status_strings_are_case_insensitive() {
	let text = r#"{"parameters": {"constants": {"m_Z": {"value": 91.1876, "status": "Established", "source": "ESTABLISHED:PDG2024"}}},
		"formulas": {"formulas": {}}}"#;
	let registry = ParamRegistry::new();
	parse_registry_document(text, origin())
		.unwrap()
		.populate(&registry, &mut FormulaCatalog::new(), origin())
		.unwrap();
	assert_eq!(registry.get_entry("constants.m_Z").unwrap().status, Status::Established);
}

#[test]
fn unknown_status_is_malformed() {
	let text = r#"{"parameters": {"x": {"y": {"value": 1, "status": "MEASURED", "source": "s"}}},
		"formulas": {"formulas": {}}}"#;
	let err = parse_registry_document(text, origin()).unwrap_err();
	assert!(matches!(err, DocumentError::Malformed { .. }), "{err}");
}

#[rstest]
#[case::no_parameters(r#"{"formulas": {"formulas": {}}}"#)]
#[case::no_formulas(r#"{"parameters": {}}"#)]
#[case::no_value(r#"{"parameters": {"x": {"y": {"status": "DERIVED", "source": "s"}}}, "formulas": {"formulas": {}}}"#)]
#[case::no_source(r#"{"parameters": {"x": {"y": {"value": 1, "status": "DERIVED"}}}, "formulas": {"formulas": {}}}"#)]
#[case::category_not_object(r#"{"parameters": {"x": [1, 2]}, "formulas": {"formulas": {}}}"#)]
#[case::formula_without_inputs(r#"{"parameters": {}, "formulas": {"formulas": {"f": {"outputParams": []}}}}"#)]
#[case::truncated(r#"{"parameters": {}, "formulas": {"formulas": {}}"#)]
fn incomplete_documents_are_malformed(#[case] text: &str) {
	let err = parse_registry_document(text, origin()).unwrap_err();
	assert!(matches!(err, DocumentError::Malformed { .. }), "{text}: {err}");
}

#[test]
fn populate_respects_write_protection() {
	let registry = ParamRegistry::new();
	registry.inject_geometric("topology.b3", 21_i64, "other_origin").unwrap();

	let err = parse_registry_document(REGISTRY, origin())
		.unwrap()
		.populate(&registry, &mut FormulaCatalog::new(), origin())
		.unwrap_err();
	match err {
		DocumentError::Parameter { category, name, source, .. } => {
			assert_eq!((category.as_str(), name.as_str()), ("topology", "b3"));
			assert!(matches!(source, RegistryError::Conflict { .. }));
		}
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn structure_document_parses_and_validates() {
	let text = r#"{"phases": [
		{"name": "Topology", "order": 1, "simulations": [{"name": "G2Geometry", "inputs": [], "outputs": ["topology.b3"]}]},
		{"name": "Gauge", "order": 2, "simulations": [{"name": "Unification", "inputs": ["topology.b3"], "outputs": ["gauge.M_GUT"]}]}
	]}"#;
	let structure = parse_structure_document(text, Path::new("simulation_structure.json")).unwrap();
	assert_eq!(structure.phases().len(), 2);

	let bad = r#"{"phases": [{"name": "", "order": 1, "simulations": []}]}"#;
	let err = parse_structure_document(bad, Path::new("simulation_structure.json")).unwrap_err();
	assert!(err.to_string().contains("simulation_structure.json"), "{err}");
}

#[test]
fn export_round_trips_through_disk() {
	let registry = ParamRegistry::new();
	let mut catalog = FormulaCatalog::new();
	parse_registry_document(REGISTRY, origin())
		.unwrap()
		.populate(&registry, &mut catalog, origin())
		.unwrap();

	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("nested/theory_output.json");
	let document = RegistryDocument::from_parts(&registry.snapshot(), &catalog);
	write_registry_document(&path, &document).unwrap();

	let reloaded = ParamRegistry::new();
	let mut reloaded_catalog = FormulaCatalog::new();
	read_registry_document(&path)
		.unwrap()
		.populate(&reloaded, &mut reloaded_catalog, &path)
		.unwrap();

	assert_eq!(*reloaded.snapshot(), *registry.snapshot());
	assert_eq!(reloaded_catalog.len(), catalog.len());
	assert_eq!(reloaded_catalog.get("proton-lifetime"), catalog.get("proton-lifetime"));
}

#[test]
fn param_paths_lists_declared_parameters() {
	let document = parse_registry_document(REGISTRY, origin()).unwrap();
	let paths: Vec<_> = document.param_paths().collect();
	assert_eq!(paths, vec!["topology.b3", "topology.chi_eff", "proton_decay.tau_p_years"]);
}

#[test]
fn reading_a_missing_file_is_a_read_error() {
	let dir = tempfile::tempdir().unwrap();
	let err = read_registry_document(&dir.path().join("absent.json")).unwrap_err();
	assert!(matches!(err, DocumentError::Read { .. }));
}
