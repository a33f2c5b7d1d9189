use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Trust tier of a parameter value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum Status {
	/// External measured constant (PDG, CODATA, ...).
	Established,
	/// Fixed by the topological input.
	Geometric,
	/// Computed from other parameters.
	#[default]
	Derived,
	/// Model prediction awaiting experimental test.
	Predicted,
	/// Tuned to match an external value.
	Calibrated,
}

impl Status {
	pub const ALL: [Status; 5] = [
		Status::Established,
		Status::Geometric,
		Status::Derived,
		Status::Predicted,
		Status::Calibrated,
	];

	/// Whether entries with this status reject writes from a different source.
	pub const fn is_protected(self) -> bool {
		match self {
			Self::Established | Self::Geometric => true,
			Self::Derived | Self::Predicted | Self::Calibrated => false,
		}
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Established => "ESTABLISHED",
			Self::Geometric => "GEOMETRIC",
			Self::Derived => "DERIVED",
			Self::Predicted => "PREDICTED",
			Self::Calibrated => "CALIBRATED",
		}
	}
}

impl fmt::Display for Status {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Returned when parsing a status string outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown parameter status {0:?}")]
pub struct UnknownStatus(pub String);

impl TryFrom<String> for Status {
	type Error = UnknownStatus;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl FromStr for Status {
	type Err = UnknownStatus;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| UnknownStatus(s.to_string()))
	}
}
