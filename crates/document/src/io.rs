use std::fs;
use std::path::Path;

use keystone_graph::SimulationStructure;
use serde::Serialize;
use tracing::info;

use crate::error::{DocumentError, Result};
use crate::schema::RegistryDocument;

/// Parses a registry document; `origin` names the source in errors.
pub fn parse_registry_document(text: &str, origin: &Path) -> Result<RegistryDocument> {
	serde_json::from_str(text).map_err(|source| DocumentError::Malformed {
		path: origin.to_path_buf(),
		source,
	})
}

/// Parses and validates a simulation structure document.
pub fn parse_structure_document(text: &str, origin: &Path) -> Result<SimulationStructure> {
	serde_json::from_str(text).map_err(|source| DocumentError::Malformed {
		path: origin.to_path_buf(),
		source,
	})
}

pub fn read_registry_document(path: &Path) -> Result<RegistryDocument> {
	parse_registry_document(&read(path)?, path)
}

pub fn read_structure_document(path: &Path) -> Result<SimulationStructure> {
	parse_structure_document(&read(path)?, path)
}

pub fn write_registry_document(path: &Path, document: &RegistryDocument) -> Result<()> {
	write_json(path, document)
}

/// Writes `value` as pretty-printed JSON, creating parent directories as needed.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
	let write_err = |source: std::io::Error| DocumentError::Write {
		path: path.to_path_buf(),
		source,
	};
	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		fs::create_dir_all(parent).map_err(write_err)?;
	}
	let mut text = serde_json::to_string_pretty(value).map_err(|e| write_err(std::io::Error::other(e)))?;
	text.push('\n');
	fs::write(path, text).map_err(write_err)?;
	info!(path = %path.display(), "wrote json document");
	Ok(())
}

fn read(path: &Path) -> Result<String> {
	fs::read_to_string(path).map_err(|source| DocumentError::Read {
		path: path.to_path_buf(),
		source,
	})
}
