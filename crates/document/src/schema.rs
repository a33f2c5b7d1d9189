use std::path::Path;

use indexmap::IndexMap;
use keystone_formulas::{FormulaCatalog, FormulaEntry};
use keystone_registry::{Metadata, ParamRegistry, ParamValue, ParamWrite, RegistrySnapshot, Status};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DocumentError, Result};

/// Persisted registry: parameters grouped by category, plus formula metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryDocument {
	/// category -> name -> record
	pub parameters: IndexMap<String, IndexMap<String, ParameterRecord>>,
	pub formulas: FormulasSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormulasSection {
	pub formulas: IndexMap<String, FormulaRecord>,
}

/// One stored parameter. Fields beyond the known ones are folded into `metadata` on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRecord {
	pub value: ParamValue,
	pub status: Status,
	#[serde(default)]
	pub uncertainty: Option<f64>,
	pub source: String,
	#[serde(default, skip_serializing_if = "IndexMap::is_empty")]
	pub metadata: Metadata,
	#[serde(flatten)]
	pub extra: Metadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulaRecord {
	pub input_params: Vec<String>,
	pub output_params: Vec<String>,
	#[serde(default)]
	pub related_formulas: Vec<String>,
	#[serde(default)]
	pub label: String,
	#[serde(default)]
	pub latex: String,
	#[serde(default)]
	pub plain_text: String,
	#[serde(default)]
	pub category: String,
	#[serde(default)]
	pub references: Vec<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub simulation_file: Option<String>,
}

/// Counts of records loaded by [`RegistryDocument::populate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Populated {
	pub parameters: usize,
	pub formulas: usize,
}

impl ParameterRecord {
	fn into_write(self, path: String) -> ParamWrite {
		let mut metadata = self.metadata;
		metadata.extend(self.extra);
		ParamWrite::new(path, self.value, self.source)
			.with_status(self.status)
			.with_uncertainty(self.uncertainty)
			.with_metadata(metadata)
	}
}

impl FormulaRecord {
	fn into_entry(self, id: String) -> FormulaEntry {
		FormulaEntry {
			id,
			label: self.label,
			latex: self.latex,
			plain_text: self.plain_text,
			category: self.category,
			input_params: self.input_params,
			output_params: self.output_params,
			related_formulas: self.related_formulas,
			references: self.references,
			simulation_file: self.simulation_file,
		}
	}
}

impl From<&FormulaEntry> for FormulaRecord {
	fn from(formula: &FormulaEntry) -> Self {
		Self {
			input_params: formula.input_params.clone(),
			output_params: formula.output_params.clone(),
			related_formulas: formula.related_formulas.clone(),
			label: formula.label.clone(),
			latex: formula.latex.clone(),
			plain_text: formula.plain_text.clone(),
			category: formula.category.clone(),
			references: formula.references.clone(),
			simulation_file: formula.simulation_file.clone(),
		}
	}
}

impl RegistryDocument {
	/// Publishes every record into `registry` and `catalog`.
	///
	/// Writes go through the normal protection rules, so loading a document on top of a
	/// populated registry can fail with a conflict. `origin` is only used in error messages.
	pub fn populate(self, registry: &ParamRegistry, catalog: &mut FormulaCatalog, origin: &Path) -> Result<Populated> {
		let mut populated = Populated::default();

		for (category, records) in self.parameters {
			for (name, record) in records {
				let path = format!("{category}.{name}");
				registry
					.set_param(record.into_write(path))
					.map_err(|source| DocumentError::Parameter {
						path: origin.to_path_buf(),
						category: category.clone(),
						name: name.clone(),
						source,
					})?;
				populated.parameters += 1;
			}
		}

		for (id, record) in self.formulas.formulas {
			let source = record.simulation_file.clone().unwrap_or_default();
			catalog
				.add_formula(record.into_entry(id.clone()), &source)
				.map_err(|source| DocumentError::Formula {
					path: origin.to_path_buf(),
					id,
					source,
				})?;
			populated.formulas += 1;
		}

		debug!(
			origin = %origin.display(),
			parameters = populated.parameters,
			formulas = populated.formulas,
			"registry document loaded"
		);
		Ok(populated)
	}

	/// Builds the persisted form of a registry snapshot and catalog.
	pub fn from_parts(snapshot: &RegistrySnapshot, catalog: &FormulaCatalog) -> Self {
		let parameters = snapshot
			.categories()
			.into_iter()
			.map(|(category, entries)| {
				let records = entries
					.into_iter()
					.map(|entry| {
						let record = ParameterRecord {
							value: entry.value.clone(),
							status: entry.status,
							uncertainty: entry.uncertainty,
							source: entry.source.clone(),
							metadata: entry.metadata.clone(),
							extra: Metadata::new(),
						};
						(entry.path.name().to_string(), record)
					})
					.collect();
				(category.to_string(), records)
			})
			.collect();

		let formulas = catalog
			.iter()
			.map(|formula| (formula.id.clone(), FormulaRecord::from(formula)))
			.collect();

		Self {
			parameters,
			formulas: FormulasSection { formulas },
		}
	}

	/// All parameter paths the document declares, without loading it.
	pub fn param_paths(&self) -> impl Iterator<Item = String> + '_ {
		self.parameters
			.iter()
			.flat_map(|(category, records)| records.keys().map(move |name| format!("{category}.{name}")))
	}
}
