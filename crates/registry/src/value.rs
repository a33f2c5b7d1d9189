use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value stored under a parameter path.
///
/// Most parameters are plain numbers; structured values (spectra, matrices, bound tables) use
/// the list and map variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
	Bool(bool),
	Integer(i64),
	Number(f64),
	Text(String),
	List(Vec<ParamValue>),
	Map(IndexMap<String, ParamValue>),
}

impl fmt::Display for ParamValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bool(b) => write!(f, "{b}"),
			Self::Integer(i) => write!(f, "{i}"),
			Self::Number(n) => write!(f, "{n}"),
			Self::Text(s) => write!(f, "{s:?}"),
			Self::List(items) => write!(f, "[{} items]", items.len()),
			Self::Map(fields) => write!(f, "{{{} fields}}", fields.len()),
		}
	}
}

impl From<f64> for ParamValue {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<i64> for ParamValue {
	fn from(value: i64) -> Self {
		Self::Integer(value)
	}
}

impl From<bool> for ParamValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<&str> for ParamValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for ParamValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
	fn from(values: Vec<T>) -> Self {
		Self::List(values.into_iter().map(Into::into).collect())
	}
}
