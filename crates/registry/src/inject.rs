//! Status-pinning convenience writers.
//!
//! Each wrapper fixes the [`Status`] and prefixes the source with the status tag
//! (`ESTABLISHED:PDG2024`), then defers to [`ParamRegistry::set_param`].

use crate::entry::ParamWrite;
use crate::error::Result;
use crate::runtime::{ParamRegistry, SetOutcome};
use crate::status::Status;
use crate::value::ParamValue;

impl ParamRegistry {
	/// Publishes an externally measured constant, e.g. `reference = "PDG2024"`.
	pub fn inject_established(
		&self,
		path: impl Into<String>,
		value: impl Into<ParamValue>,
		reference: &str,
		uncertainty: Option<f64>,
	) -> Result<SetOutcome> {
		self.set_param(
			ParamWrite::new(path, value, tagged(Status::Established, reference))
				.with_status(Status::Established)
				.with_uncertainty(uncertainty),
		)
	}

	/// Publishes a value fixed by the topological input.
	pub fn inject_geometric(&self, path: impl Into<String>, value: impl Into<ParamValue>, origin: &str) -> Result<SetOutcome> {
		self.set_param(ParamWrite::new(path, value, tagged(Status::Geometric, origin)).with_status(Status::Geometric))
	}

	/// Publishes a model prediction produced by `producer`.
	pub fn inject_prediction(
		&self,
		path: impl Into<String>,
		value: impl Into<ParamValue>,
		producer: &str,
		uncertainty: Option<f64>,
	) -> Result<SetOutcome> {
		self.set_param(
			ParamWrite::new(path, value, tagged(Status::Predicted, producer))
				.with_status(Status::Predicted)
				.with_uncertainty(uncertainty),
		)
	}
}

fn tagged(status: Status, name: &str) -> String {
	format!("{status}:{name}")
}
