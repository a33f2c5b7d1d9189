use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::path::ParamPath;
use crate::status::Status;
use crate::value::ParamValue;

/// Open key/value annotations (bound type, experimental reference, units...).
pub type Metadata = IndexMap<String, serde_json::Value>;

/// A stored parameter together with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterEntry {
	pub path: ParamPath,
	pub value: ParamValue,
	/// Producer of the value; doubles as the audit record for the last accepted write.
	pub source: String,
	pub status: Status,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub uncertainty: Option<f64>,
	#[serde(default, skip_serializing_if = "IndexMap::is_empty")]
	pub metadata: Metadata,
}

impl ParameterEntry {
	/// Whether `other` carries the same payload, ignoring the path.
	pub(crate) fn same_payload(&self, other: &ParameterEntry) -> bool {
		self.source == other.source
			&& self.status == other.status
			&& self.value == other.value
			&& self.uncertainty == other.uncertainty
			&& self.metadata == other.metadata
	}
}

/// A pending `set_param` call.
///
/// Defaults to [`Status::Derived`] with no uncertainty and empty metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamWrite {
	pub path: String,
	pub value: ParamValue,
	pub source: String,
	pub status: Status,
	pub uncertainty: Option<f64>,
	pub metadata: Metadata,
}

impl ParamWrite {
	pub fn new(path: impl Into<String>, value: impl Into<ParamValue>, source: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			value: value.into(),
			source: source.into(),
			status: Status::default(),
			uncertainty: None,
			metadata: Metadata::new(),
		}
	}

	pub fn with_status(mut self, status: Status) -> Self {
		self.status = status;
		self
	}

	pub fn with_uncertainty(mut self, uncertainty: impl Into<Option<f64>>) -> Self {
		self.uncertainty = uncertainty.into();
		self
	}

	pub fn with_metadata(mut self, metadata: Metadata) -> Self {
		self.metadata = metadata;
		self
	}

	pub fn with_metadata_entry(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
		self.metadata.insert(key.into(), value.into());
		self
	}

	pub(crate) fn into_entry(self, path: ParamPath) -> ParameterEntry {
		ParameterEntry {
			path,
			value: self.value,
			source: self.source,
			status: self.status,
			uncertainty: self.uncertainty,
			metadata: self.metadata,
		}
	}
}
