use std::path::PathBuf;

use anyhow::Context;
use keystone_config::{Config, load_config_file, load_config_from_dir};
use keystone_document::{read_registry_document, read_structure_document, write_json};
use keystone_formulas::FormulaCatalog;
use keystone_registry::ParamRegistry;
use keystone_validate::{ValidationInput, ValidationOutcome, validate};
use tracing::{info, warn};

use crate::cli::Args;

/// Exit status when `--strict` is set and the report holds errors.
pub const STRICT_FAILURE: u8 = 2;

/// Result of one invocation, before it is turned into a process exit status.
#[derive(Debug)]
pub struct RunOutput {
	pub outcome: ValidationOutcome,
	pub report_path: PathBuf,
}

pub fn load_config(args: &Args) -> anyhow::Result<Config> {
	let config = match &args.config {
		Some(path) => load_config_file(path, &args.dir),
		None => load_config_from_dir(&args.dir),
	};
	config.context("loading configuration")
}

/// Loads both documents, validates them and writes the JSON report.
pub fn run(args: &Args) -> anyhow::Result<RunOutput> {
	let config = load_config(args)?;

	let registry = ParamRegistry::with_label("keystone");
	let mut catalog = FormulaCatalog::new();
	let populated = read_registry_document(&config.registry_document)
		.and_then(|document| document.populate(&registry, &mut catalog, &config.registry_document))
		.context("loading registry document")?;
	let structure = read_structure_document(&config.structure_document).context("loading simulation structure")?;
	info!(
		parameters = populated.parameters,
		formulas = populated.formulas,
		phases = structure.phases().len(),
		"documents loaded"
	);

	let repair = catalog.repair_bidirectional_links();
	if !repair.is_noop() {
		info!(added = repair.added.len(), "related formula links repaired");
	}

	let input = ValidationInput::capture(&registry, &catalog, structure);
	let outcome = validate(input, config.validation.clone());

	let report_path = config.report_path();
	write_json(&report_path, &outcome).context("writing validation report")?;

	Ok(RunOutput { outcome, report_path })
}

/// Findings never fail a run unless `strict` is set.
pub fn exit_status(strict: bool, outcome: &ValidationOutcome) -> u8 {
	if strict && outcome.has_fatal_issues {
		warn!(errors = outcome.report.summary.errors, "strict mode: validation errors present");
		STRICT_FAILURE
	} else {
		0
	}
}
