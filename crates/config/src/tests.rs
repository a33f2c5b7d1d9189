use std::path::Path;

use keystone_registry::Status;
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

#[test]
fn missing_file_yields_resolved_defaults() {
	let dir = tempfile::tempdir().unwrap();
	let config = load_config_from_dir(dir.path()).unwrap();

	assert_eq!(config.registry_document, dir.path().join("theory_output.json"));
	assert_eq!(config.structure_document, dir.path().join("simulation_structure.json"));
	assert_eq!(config.report_path(), dir.path().join("reports/dependency_validation.json"));
	assert_eq!(config.validation, ValidationOptions::default());
}

#[test]
fn partial_file_keeps_remaining_defaults() {
	let dir = tempfile::tempdir().unwrap();
	std::fs::write(
		dir.path().join(CONFIG_FILE),
		r#"
registry_document = "out/registry.json"

[validation]
key_params = ["gauge.M_GUT"]
baseline_statuses = ["ESTABLISHED", "GEOMETRIC"]
"#,
	)
	.unwrap();

	let config = load_config_from_dir(dir.path()).unwrap();
	assert_eq!(config.registry_document, dir.path().join("out/registry.json"));
	assert_eq!(config.structure_document, dir.path().join("simulation_structure.json"));
	assert_eq!(config.validation.key_params, vec!["gauge.M_GUT"]);
	assert!(config.validation.baseline_params.is_empty());
	assert_eq!(config.validation.baseline_statuses, vec![Status::Established, Status::Geometric]);
}

#[test]
fn absolute_paths_are_not_rebased() {
	let base = Path::new("/project");
	let config = Config {
		reports_dir: PathBuf::from("/var/reports"),
		..Config::default()
	}
	.resolve_against(base);

	assert_eq!(config.reports_dir, PathBuf::from("/var/reports"));
	assert_eq!(config.registry_document, base.join("theory_output.json"));
}

#[rstest]
#[case::unknown_key("registry = \"x.json\"")]
#[case::unknown_validation_key("[validation]\nkey_param = []")]
#[case::unknown_status("[validation]\nbaseline_statuses = [\"MEASURED\"]")]
#[case::syntax("reports_dir = ")]
fn invalid_config_is_a_parse_error(#[case] text: &str) {
	let err = Config::from_toml(text, Path::new("keystone.toml")).unwrap_err();
	assert!(matches!(err, ConfigError::Parse { .. }), "{text}: {err}");
}

#[test]
fn explicit_file_must_exist() {
	let dir = tempfile::tempdir().unwrap();
	let err = load_config_file(&dir.path().join("custom.toml"), dir.path()).unwrap_err();
	assert!(matches!(err, ConfigError::Read { .. }));
}
