use crate::status::Status;

/// Registry operation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
	/// A write targeted a protected path owned by a different source.
	#[error(
		"write conflict on {path}: {status} entry owned by {existing_source:?}, rejected write from {incoming_source:?}"
	)]
	Conflict {
		path: String,
		status: Status,
		existing_source: String,
		incoming_source: String,
	},

	/// Read of a path that has never been written.
	#[error("parameter not found: {path}")]
	NotFound { path: String },

	/// The path string is not a valid `category.name` key.
	#[error("invalid parameter path {path:?}: {reason}")]
	InvalidPath { path: String, reason: &'static str },
}

pub type Result<T, E = RegistryError> = std::result::Result<T, E>;
