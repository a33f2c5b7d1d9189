use serde::{Deserialize, Serialize};

/// Documented relationship between parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulaEntry {
	pub id: String,
	#[serde(default)]
	pub label: String,
	#[serde(default)]
	pub latex: String,
	#[serde(default)]
	pub plain_text: String,
	#[serde(default)]
	pub category: String,
	/// Registry paths or other formula ids, in declaration order.
	#[serde(default)]
	pub input_params: Vec<String>,
	/// Registry paths, or the formula's own id.
	#[serde(default)]
	pub output_params: Vec<String>,
	#[serde(default)]
	pub related_formulas: Vec<String>,
	#[serde(default)]
	pub references: Vec<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub simulation_file: Option<String>,
}

impl FormulaEntry {
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			..Self::default()
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = label.into();
		self
	}

	pub fn with_category(mut self, category: impl Into<String>) -> Self {
		self.category = category.into();
		self
	}

	pub fn with_inputs<I, S>(mut self, inputs: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.input_params = inputs.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_outputs<I, S>(mut self, outputs: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.output_params = outputs.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_related<I, S>(mut self, related: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.related_formulas = related.into_iter().map(Into::into).collect();
		self
	}

	/// Whether this formula lists `param` among its outputs.
	pub fn produces(&self, param: &str) -> bool {
		self.output_params.iter().any(|p| p == param)
	}

	pub fn relates_to(&self, other: &str) -> bool {
		self.related_formulas.iter().any(|r| r == other)
	}
}
