use std::fmt;

use serde::Serialize;

/// The check that produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
	Order,
	Linkage,
	Completeness,
}

impl fmt::Display for Check {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Order => write!(f, "order"),
			Self::Linkage => write!(f, "linkage"),
			Self::Completeness => write!(f, "completeness"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
	Warning,
	Error,
}

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
	/// A simulation consumes a parameter no earlier phase or baseline provides.
	MissingInput,
	/// A formula input has no producer anywhere.
	LinkMissingInput,
	/// A formula output is neither registered nor produced by a simulation.
	UnregisteredOutput,
	/// A key parameter is never produced.
	MissingKeyParam,
}

impl IssueKind {
	pub const fn check(self) -> Check {
		match self {
			Self::MissingInput => Check::Order,
			Self::LinkMissingInput | Self::UnregisteredOutput => Check::Linkage,
			Self::MissingKeyParam => Check::Completeness,
		}
	}

	/// Unregistered outputs usually mean a value still has to be published, not a broken
	/// data flow, so they only warn.
	pub const fn severity(self) -> Severity {
		match self {
			Self::UnregisteredOutput => Severity::Warning,
			Self::MissingInput | Self::LinkMissingInput | Self::MissingKeyParam => Severity::Error,
		}
	}
}

impl fmt::Display for IssueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingInput => write!(f, "missing input"),
			Self::LinkMissingInput => write!(f, "missing input"),
			Self::UnregisteredOutput => write!(f, "unregistered output"),
			Self::MissingKeyParam => write!(f, "missing key parameter"),
		}
	}
}

/// A single non-fatal finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
	pub check: Check,
	pub kind: IssueKind,
	pub severity: Severity,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub phase: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub simulation: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub formula_id: Option<String>,
	/// Parameter paths the issue is about.
	pub params: Vec<String>,
	pub message: String,
}

impl Issue {
	fn new(kind: IssueKind, params: Vec<String>, message: String) -> Self {
		Self {
			check: kind.check(),
			kind,
			severity: kind.severity(),
			phase: None,
			simulation: None,
			formula_id: None,
			params,
			message,
		}
	}

	pub fn missing_input(phase: &str, simulation: &str, missing: Vec<String>) -> Self {
		let message = format!(
			"phase {phase:?}: simulation {simulation:?} needs {} not produced by an earlier phase",
			missing.join(", ")
		);
		Self {
			phase: Some(phase.to_string()),
			simulation: Some(simulation.to_string()),
			..Self::new(IssueKind::MissingInput, missing, message)
		}
	}

	pub fn link_missing_input(formula_id: &str, param: &str) -> Self {
		let message = format!("formula {formula_id:?}: input {param:?} has no producer");
		Self {
			formula_id: Some(formula_id.to_string()),
			..Self::new(IssueKind::LinkMissingInput, vec![param.to_string()], message)
		}
	}

	pub fn unregistered_output(formula_id: &str, param: &str) -> Self {
		let message = format!("formula {formula_id:?}: output {param:?} is not registered");
		Self {
			formula_id: Some(formula_id.to_string()),
			..Self::new(IssueKind::UnregisteredOutput, vec![param.to_string()], message)
		}
	}

	pub fn missing_key_param(param: &str) -> Self {
		let message = format!("key parameter {param:?} is never produced");
		Self::new(IssueKind::MissingKeyParam, vec![param.to_string()], message)
	}

	pub fn is_error(&self) -> bool {
		self.severity == Severity::Error
	}
}

impl fmt::Display for Issue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}] {}", self.check, self.message)
	}
}
