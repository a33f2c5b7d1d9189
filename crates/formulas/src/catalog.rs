use indexmap::IndexMap;
use tracing::debug;

use crate::entry::FormulaEntry;
use crate::error::{CatalogError, Result};

/// Insertion-ordered store of formula metadata keyed by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormulaCatalog {
	pub(crate) formulas: IndexMap<String, FormulaEntry>,
}

impl FormulaCatalog {
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts a new formula, recording `source` as its provenance.
	///
	/// Fails with [`CatalogError::DuplicateFormula`] if the id is taken; use
	/// [`Self::replace_formula`] to overwrite deliberately.
	pub fn add_formula(&mut self, formula: FormulaEntry, source: &str) -> Result<()> {
		let formula = prepare(formula, source)?;
		if let Some(existing) = self.formulas.get(&formula.id) {
			return Err(CatalogError::DuplicateFormula {
				id: formula.id,
				existing_source: existing.simulation_file.clone(),
			});
		}
		debug!(id = %formula.id, source, "formula added");
		self.formulas.insert(formula.id.clone(), formula);
		Ok(())
	}

	/// Inserts or overwrites a formula, returning the replaced entry.
	///
	/// A replaced formula keeps its original position in iteration order.
	pub fn replace_formula(&mut self, formula: FormulaEntry, source: &str) -> Result<Option<FormulaEntry>> {
		let formula = prepare(formula, source)?;
		debug!(id = %formula.id, source, "formula replaced");
		Ok(self.formulas.insert(formula.id.clone(), formula))
	}

	pub fn get(&self, id: &str) -> Option<&FormulaEntry> {
		self.formulas.get(id)
	}

	pub fn contains(&self, id: &str) -> bool {
		self.formulas.contains_key(id)
	}

	pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
		self.formulas.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = &FormulaEntry> + '_ {
		self.formulas.values()
	}

	pub fn len(&self) -> usize {
		self.formulas.len()
	}

	pub fn is_empty(&self) -> bool {
		self.formulas.is_empty()
	}

	/// Formulas declaring `param` as an output.
	pub fn producers_of<'a>(&'a self, param: &'a str) -> impl Iterator<Item = &'a FormulaEntry> + 'a {
		self.formulas.values().filter(move |f| f.produces(param))
	}

	/// Formulas grouped by category, categories in first-seen order.
	pub fn by_category(&self) -> IndexMap<&str, Vec<&FormulaEntry>> {
		let mut groups: IndexMap<&str, Vec<&FormulaEntry>> = IndexMap::new();
		for formula in self.formulas.values() {
			groups.entry(formula.category.as_str()).or_default().push(formula);
		}
		groups
	}
}

fn prepare(mut formula: FormulaEntry, source: &str) -> Result<FormulaEntry> {
	if formula.id.trim().is_empty() {
		return Err(CatalogError::EmptyId);
	}
	if !source.is_empty() {
		formula.simulation_file = Some(source.to_string());
	}
	Ok(formula)
}

impl FromIterator<FormulaEntry> for FormulaCatalog {
	/// Builds a catalog where later formulas replace earlier ones with the same id.
	fn from_iter<I: IntoIterator<Item = FormulaEntry>>(iter: I) -> Self {
		Self {
			formulas: iter.into_iter().map(|f| (f.id.clone(), f)).collect(),
		}
	}
}
