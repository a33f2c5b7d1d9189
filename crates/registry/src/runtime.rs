//! Registry handle with atomic publication.
//!
//! # Role
//!
//! This module provides the thread-safe entrypoint for reading and writing parameters. Every
//! accepted write is a CAS swap of the whole snapshot, so the protection check and the write
//! it guards happen against the same state.
//!
//! # Invariants
//!
//! - Protected entries are only rewritten by their own source (see `tests::protected_conflict_leaves_entry_untouched`).
//! - Concurrent writes are linearizable (see `tests::concurrent_writers_are_not_lost`).

use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::{debug, warn};

use crate::entry::{ParamWrite, ParameterEntry};
use crate::error::{RegistryError, Result};
use crate::path::ParamPath;
use crate::snapshot::RegistrySnapshot;
use crate::value::ParamValue;

/// Result of an accepted write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetOutcome {
	/// Path was new; entry inserted.
	Inserted,
	/// Path existed; entry fully replaced.
	Replaced {
		/// Source of the entry that was replaced.
		previous_source: String,
	},
	/// Same source rewrote an identical payload; nothing was published.
	Unchanged,
}

/// Explicit registry handle shared by every producer and the validator.
///
/// Cheap to read from any thread. Writers are expected to run sequentially during population,
/// but concurrent writers still observe linearizable last-writer-wins semantics.
pub struct ParamRegistry {
	label: &'static str,
	snap: ArcSwap<RegistrySnapshot>,
}

impl Default for ParamRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for ParamRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ParamRegistry")
			.field("label", &self.label)
			.field("len", &self.len())
			.finish()
	}
}

impl ParamRegistry {
	pub fn new() -> Self {
		Self::with_label("parameters")
	}

	/// Creates an empty registry whose log lines carry `label`.
	pub fn with_label(label: &'static str) -> Self {
		Self {
			label,
			snap: ArcSwap::from_pointee(RegistrySnapshot::default()),
		}
	}

	/// Writes or overwrites the entry at `write.path`.
	///
	/// Fails with [`RegistryError::Conflict`] when the stored entry is
	/// [`Established`](crate::Status::Established) or [`Geometric`](crate::Status::Geometric)
	/// and `write.source` differs from the stored source. The stored entry is left untouched in
	/// that case. Otherwise the new entry fully replaces the old one.
	pub fn set_param(&self, write: ParamWrite) -> Result<SetOutcome> {
		let path = ParamPath::new(write.path.clone())?;
		let incoming = Arc::new(write.into_entry(path));

		loop {
			let old = self.snap.load_full();

			let outcome = match old.entries.get(incoming.path.as_str()) {
				None => SetOutcome::Inserted,
				Some(existing) => {
					if existing.status.is_protected() && existing.source != incoming.source {
						warn!(
							registry = self.label,
							path = %incoming.path,
							status = %existing.status,
							existing_source = %existing.source,
							incoming_source = %incoming.source,
							"rejected write to protected parameter"
						);
						return Err(RegistryError::Conflict {
							path: incoming.path.to_string(),
							status: existing.status,
							existing_source: existing.source.clone(),
							incoming_source: incoming.source.clone(),
						});
					}
					if existing.same_payload(&incoming) {
						return Ok(SetOutcome::Unchanged);
					}
					SetOutcome::Replaced {
						previous_source: existing.source.clone(),
					}
				}
			};

			let mut entries = old.entries.clone();
			entries.insert(incoming.path.clone(), Arc::clone(&incoming));
			let new_arc = Arc::new(RegistrySnapshot { entries });

			let prev = self.snap.compare_and_swap(&old, new_arc);
			if Arc::ptr_eq(&prev, &old) {
				debug!(
					registry = self.label,
					path = %incoming.path,
					status = %incoming.status,
					source = %incoming.source,
					?outcome,
					"parameter published"
				);
				return Ok(outcome);
			}
			// Lost the race; re-check protection against the newer snapshot.
		}
	}

	/// Returns the value at `path`.
	pub fn get_param(&self, path: &str) -> Result<ParamValue> {
		self.get_entry(path).map(|entry| entry.value.clone())
	}

	pub fn has_param(&self, path: &str) -> bool {
		self.snap.load().contains(path)
	}

	/// Returns the full entry, provenance included.
	pub fn get_entry(&self, path: &str) -> Result<Arc<ParameterEntry>> {
		self.snap
			.load()
			.get(path)
			.cloned()
			.ok_or_else(|| RegistryError::NotFound { path: path.to_string() })
	}

	/// Immutable view of the current state; unaffected by later writes.
	pub fn snapshot(&self) -> Arc<RegistrySnapshot> {
		self.snap.load_full()
	}

	/// All registered paths in sorted order.
	pub fn paths(&self) -> Vec<ParamPath> {
		self.snap.load().paths().cloned().collect()
	}

	pub fn len(&self) -> usize {
		self.snap.load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
