//! The three validation passes.
//!
//! # What These Passes Do
//!
//! 1. **Order** ([`check_order`]) - temporal availability of simulation inputs
//! 2. **Linkage** ([`check_linkage`]) - existence of producers for formula inputs/outputs
//! 3. **Completeness** ([`check_completeness`]) - coverage of the key parameter allow-list
//!
//! # What These Passes Do NOT Do
//!
//! - **No mutation** - the input is read-only
//! - **No short-circuiting** - every pass returns all of its findings
//! - **No verdict** - severity is attached per issue, the caller decides what is fatal

use std::collections::BTreeSet;

use crate::input::ValidationInput;
use crate::options::ValidationOptions;

mod completeness;
mod linkage;
mod order;

pub use completeness::check_completeness;
pub use linkage::check_linkage;
pub use order::check_order;

/// Lookups shared by the passes, computed once per run.
pub struct ValidationContext<'a> {
	pub input: &'a ValidationInput,
	pub options: &'a ValidationOptions,
	/// Union of every simulation output, independent of phase order.
	pub global_outputs: BTreeSet<&'a str>,
}

impl<'a> ValidationContext<'a> {
	pub fn new(input: &'a ValidationInput, options: &'a ValidationOptions) -> Self {
		Self {
			input,
			options,
			global_outputs: input.structure.global_outputs(),
		}
	}

	pub fn in_registry(&self, param: &str) -> bool {
		self.input.registry.contains(param)
	}

	pub fn simulated(&self, param: &str) -> bool {
		self.global_outputs.contains(param)
	}

	pub fn is_formula(&self, id: &str) -> bool {
		self.input.formulas.contains(id)
	}
}
