//! Project configuration for keystone.
//!
//! A project directory may carry a `keystone.toml`:
//!
//! ```toml
//! registry_document = "theory_output.json"
//! structure_document = "simulation_structure.json"
//! reports_dir = "reports"
//! report_file = "dependency_validation.json"
//!
//! [validation]
//! key_params = ["gauge.M_GUT", "proton_decay.tau_p_years"]
//! baseline_params = ["constants.planck_mass"]
//! baseline_statuses = ["ESTABLISHED", "GEOMETRIC"]
//! ```
//!
//! Every field is optional. A missing file is not an error; the defaults above apply (with
//! empty validation lists). Relative paths resolve against the project directory.

mod error;

use std::path::{Path, PathBuf};

use keystone_validate::ValidationOptions;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::{ConfigError, Result};

/// File name looked up inside a project directory.
pub const CONFIG_FILE: &str = "keystone.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub registry_document: PathBuf,
	pub structure_document: PathBuf,
	pub reports_dir: PathBuf,
	pub report_file: String,
	pub validation: ValidationOptions,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			registry_document: PathBuf::from("theory_output.json"),
			structure_document: PathBuf::from("simulation_structure.json"),
			reports_dir: PathBuf::from("reports"),
			report_file: "dependency_validation.json".to_string(),
			validation: ValidationOptions::default(),
		}
	}
}

impl Config {
	/// Parses a config from TOML text. `origin` names the source in errors.
	pub fn from_toml(text: &str, origin: &Path) -> Result<Self> {
		toml::from_str(text).map_err(|source| ConfigError::Parse {
			path: origin.to_path_buf(),
			source,
		})
	}

	/// Rewrites relative document and report paths against `base`.
	pub fn resolve_against(mut self, base: &Path) -> Self {
		for path in [&mut self.registry_document, &mut self.structure_document, &mut self.reports_dir] {
			if path.is_relative() {
				*path = base.join(&*path);
			}
		}
		self
	}

	/// Where the validation report is written.
	pub fn report_path(&self) -> PathBuf {
		self.reports_dir.join(&self.report_file)
	}
}

/// Loads `keystone.toml` from `dir`, falling back to defaults when it does not exist.
///
/// Paths in the result are resolved against `dir`.
pub fn load_config_from_dir(dir: &Path) -> Result<Config> {
	let path = dir.join(CONFIG_FILE);
	if !path.exists() {
		debug!(dir = %dir.display(), "no config file, using defaults");
		return Ok(Config::default().resolve_against(dir));
	}
	load_config_file(&path, dir)
}

/// Loads an explicit config file. Relative paths inside it resolve against `base`.
pub fn load_config_file(path: &Path, base: &Path) -> Result<Config> {
	let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
		path: path.to_path_buf(),
		source,
	})?;
	let config = Config::from_toml(&text, path)?;
	debug!(
		path = %path.display(),
		key_params = config.validation.key_params.len(),
		baseline_params = config.validation.baseline_params.len(),
		"config loaded"
	);
	Ok(config.resolve_against(base))
}

#[cfg(test)]
mod tests;
