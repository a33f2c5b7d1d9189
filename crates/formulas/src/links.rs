//! Symmetric closure of `related_formulas`.
//!
//! # Invariants
//!
//! - After a repair, A lists B implies B lists A for every pair present in the catalog.
//! - A second repair is a no-op (see `tests::link_repair_is_idempotent_closure`).

use indexmap::IndexSet;
use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::FormulaCatalog;

/// A directed `related_formulas` reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RelatedLink {
	pub from: String,
	pub to: String,
}

/// Outcome of [`FormulaCatalog::repair_bidirectional_links`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkRepair {
	/// Back-links appended: `to` now lists `from`.
	pub added: Vec<RelatedLink>,
	/// References to formulas missing from the catalog; left in place, not repairable.
	pub dangling: Vec<RelatedLink>,
}

impl LinkRepair {
	pub fn is_noop(&self) -> bool {
		self.added.is_empty()
	}
}

impl FormulaCatalog {
	/// Appends every missing back-link in one pass over all ordered pairs.
	///
	/// For each A listing B where B exists and does not list A, A is appended to
	/// B's `related_formulas`. Every added back-link points at a formula that already lists its
	/// target, so no second pass is needed.
	pub fn repair_bidirectional_links(&mut self) -> LinkRepair {
		let mut pending: IndexSet<(usize, String)> = IndexSet::new();
		let mut report = LinkRepair::default();

		for (from, formula) in &self.formulas {
			for to in &formula.related_formulas {
				match self.formulas.get_full(to.as_str()) {
					Some((idx, _, target)) => {
						if !target.relates_to(from) {
							pending.insert((idx, from.clone()));
						}
					}
					None => report.dangling.push(RelatedLink {
						from: from.clone(),
						to: to.clone(),
					}),
				}
			}
		}

		for (idx, from) in pending {
			if let Some((to, target)) = self.formulas.get_index_mut(idx) {
				target.related_formulas.push(from.clone());
				debug!(from = %from, to = %to, "related formula back-link added");
				report.added.push(RelatedLink { from, to: to.clone() });
			}
		}

		for link in &report.dangling {
			warn!(from = %link.from, to = %link.to, "related formula not in catalog");
		}
		report
	}

	/// Whether every resolvable `related_formulas` reference is mirrored.
	pub fn links_are_symmetric(&self) -> bool {
		self.formulas.iter().all(|(from, formula)| {
			formula
				.related_formulas
				.iter()
				.filter_map(|to| self.formulas.get(to.as_str()))
				.all(|target| target.relates_to(from))
		})
	}
}
