use std::path::PathBuf;

use keystone_formulas::CatalogError;
use keystone_registry::RegistryError;

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
	#[error("failed to read {}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to write {}", path.display())]
	Write {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The document does not match its schema.
	#[error("malformed document {}: {source}", path.display())]
	Malformed {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	/// A parameter record was rejected by the registry.
	#[error("{}: parameter {category}.{name}", path.display())]
	Parameter {
		path: PathBuf,
		category: String,
		name: String,
		#[source]
		source: RegistryError,
	},

	/// A formula record was rejected by the catalog.
	#[error("{}: formula {id:?}", path.display())]
	Formula {
		path: PathBuf,
		id: String,
		#[source]
		source: CatalogError,
	},
}

pub type Result<T, E = DocumentError> = std::result::Result<T, E>;
