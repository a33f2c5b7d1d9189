//! Provenance-tagged parameter registry.
//!
//! Every computed or externally sourced value lives exactly once under a dot-separated
//! [`ParamPath`]. Each entry records who produced it ([`ParameterEntry::source`]) and how much it
//! is trusted ([`Status`]).
//!
//! # Mental Model
//!
//! 1. **Population:** producers hold a [`ParamRegistry`] handle and publish values through
//!    [`ParamRegistry::set_param`] or one of the `inject_*` wrappers.
//! 2. **Publication:** every accepted write builds an extended [`RegistrySnapshot`] and swaps it
//!    in atomically.
//! 3. **Consumption:** readers take [`ParamRegistry::snapshot`] and work against an immutable
//!    view that later writes cannot disturb.
//!
//! # Invariants
//!
//! - Must keep paths unique (one entry per path).
//!   - Enforced in: [`RegistrySnapshot`] (keyed map), [`ParamRegistry::set_param`].
//!   - Tested by: `tests::set_param_replaces_in_place`
//!   - Failure symptom: two values answer for the same path.
//!
//! - Must reject cross-source writes to protected paths.
//!   - Enforced in: [`Status::is_protected`], [`ParamRegistry::set_param`].
//!   - Tested by: `tests::protected_conflict_leaves_entry_untouched`
//!   - Failure symptom: a simulation silently overwrites a measured constant.
//!
//! - Must provide linearizable writes without lost updates.
//!   - Enforced in: [`ParamRegistry::set_param`] (CAS loop).
//!   - Tested by: `tests::concurrent_writers_are_not_lost`
//!   - Failure symptom: concurrent publications silently dropped.

mod entry;
mod error;
mod inject;
mod path;
mod runtime;
mod snapshot;
mod status;
mod value;

pub use entry::{Metadata, ParamWrite, ParameterEntry};
pub use error::{RegistryError, Result};
pub use path::ParamPath;
pub use runtime::{ParamRegistry, SetOutcome};
pub use snapshot::RegistrySnapshot;
pub use status::{Status, UnknownStatus};
pub use value::ParamValue;
