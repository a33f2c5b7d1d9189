use keystone_registry::Status;
use serde::{Deserialize, Serialize};

/// Externally configured validation inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationOptions {
	/// Allow-list of parameters the pipeline must eventually produce.
	pub key_params: Vec<String>,
	/// Parameters available before the first phase runs.
	pub baseline_params: Vec<String>,
	/// Registry entries with one of these statuses join the baseline.
	pub baseline_statuses: Vec<Status>,
}

impl ValidationOptions {
	pub fn with_key_params<I, S>(mut self, params: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.key_params = params.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_baseline<I, S>(mut self, params: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.baseline_params = params.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_baseline_statuses(mut self, statuses: impl IntoIterator<Item = Status>) -> Self {
		self.baseline_statuses = statuses.into_iter().collect();
		self
	}
}
