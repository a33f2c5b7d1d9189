//! Persisted document formats.
//!
//! Two JSON documents cross the process boundary:
//!
//! - the registry document (`parameters` grouped by category, plus `formulas.formulas`)
//! - `simulation_structure.json` (`phases` with their simulations)
//!
//! Both deserialize into explicit schema types. Structural defects (invalid JSON, missing
//! required fields, unknown status strings, empty names) fail with
//! [`DocumentError::Malformed`] before anything reaches the registry or the validator.

mod error;
mod io;
mod schema;

pub use error::{DocumentError, Result};
pub use io::{
	parse_registry_document, parse_structure_document, read_registry_document, read_structure_document,
	write_json, write_registry_document,
};
pub use schema::{FormulaRecord, FormulasSection, ParameterRecord, Populated, RegistryDocument};

#[cfg(test)]
mod tests;
