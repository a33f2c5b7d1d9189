//! Immutable registry views.
//!
//! # Role
//!
//! A [`RegistrySnapshot`] is the value readers work against. It contains no mutation logic;
//! writers build a new snapshot and publish it through [`crate::ParamRegistry`].

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::entry::ParameterEntry;
use crate::path::ParamPath;
use crate::status::Status;

/// Point-in-time view of every registered parameter, ordered by path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrySnapshot {
	pub(crate) entries: BTreeMap<ParamPath, Arc<ParameterEntry>>,
}

impl RegistrySnapshot {
	pub fn get(&self, path: &str) -> Option<&Arc<ParameterEntry>> {
		self.entries.get(path)
	}

	pub fn contains(&self, path: &str) -> bool {
		self.entries.contains_key(path)
	}

	pub fn paths(&self) -> impl Iterator<Item = &ParamPath> + '_ {
		self.entries.keys()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Arc<ParameterEntry>> + '_ {
		self.entries.values()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Number of entries per status; statuses with no entries are omitted.
	pub fn count_by_status(&self) -> BTreeMap<Status, usize> {
		let mut counts = BTreeMap::new();
		for entry in self.entries.values() {
			*counts.entry(entry.status).or_insert(0) += 1;
		}
		counts
	}

	/// Entries grouped by the first path segment, in path order.
	pub fn categories(&self) -> BTreeMap<&str, Vec<&ParameterEntry>> {
		let mut groups: BTreeMap<&str, Vec<&ParameterEntry>> = BTreeMap::new();
		for (path, entry) in &self.entries {
			groups.entry(path.category()).or_default().push(entry);
		}
		groups
	}
}

impl FromIterator<ParameterEntry> for RegistrySnapshot {
	/// Later entries win on duplicate paths; no write protection is applied.
	fn from_iter<I: IntoIterator<Item = ParameterEntry>>(iter: I) -> Self {
		Self {
			entries: iter
				.into_iter()
				.map(|entry| (entry.path.clone(), Arc::new(entry)))
				.collect(),
		}
	}
}
