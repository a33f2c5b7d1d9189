use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Dot-separated hierarchical parameter key, e.g. `proton_decay.tau_p_years`.
///
/// A path has at least two non-empty segments. The first segment is the category the
/// persisted document groups entries under; the remainder is the name within that category.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParamPath(String);

impl ParamPath {
	/// Parses and validates a path.
	pub fn new(raw: impl Into<String>) -> Result<Self, RegistryError> {
		let raw = raw.into();
		let mut segments = 0usize;
		for segment in raw.split('.') {
			if segment.is_empty() || segment.chars().any(char::is_whitespace) {
				return Err(RegistryError::InvalidPath {
					path: raw,
					reason: "segments must be non-empty and contain no whitespace",
				});
			}
			segments += 1;
		}
		if segments < 2 {
			return Err(RegistryError::InvalidPath {
				path: raw,
				reason: "expected `category.name`",
			});
		}
		Ok(Self(raw))
	}

	/// Builds a path from a category and a (possibly dotted) name.
	pub fn join(category: &str, name: &str) -> Result<Self, RegistryError> {
		Self::new(format!("{category}.{name}"))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// First segment.
	pub fn category(&self) -> &str {
		self.split().0
	}

	/// Everything after the first segment.
	pub fn name(&self) -> &str {
		self.split().1
	}

	fn split(&self) -> (&str, &str) {
		// Validated in `new`: at least one dot, never leading or trailing.
		self.0.split_once('.').unwrap_or((&self.0, ""))
	}
}

impl fmt::Display for ParamPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl FromStr for ParamPath {
	type Err = RegistryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

impl TryFrom<String> for ParamPath {
	type Error = RegistryError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

impl TryFrom<&str> for ParamPath {
	type Error = RegistryError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

impl From<ParamPath> for String {
	fn from(path: ParamPath) -> Self {
		path.0
	}
}

impl Borrow<str> for ParamPath {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for ParamPath {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
