use std::collections::BTreeMap;
use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use keystone_registry::Status;
use serde::Serialize;

use crate::issue::{Check, Issue, Severity};

/// Issue counts and input sizes for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
	pub order_issues: usize,
	pub linkage_issues: usize,
	pub completeness_issues: usize,
	pub errors: usize,
	pub warnings: usize,
	pub parameters: usize,
	pub formulas: usize,
	pub phases: usize,
	pub simulations: usize,
	/// Registry entries per status.
	pub parameters_by_status: BTreeMap<Status, usize>,
}

impl Summary {
	pub(crate) fn tally(&mut self, issues: &[Issue]) {
		for issue in issues {
			match issue.check {
				Check::Order => self.order_issues += 1,
				Check::Linkage => self.linkage_issues += 1,
				Check::Completeness => self.completeness_issues += 1,
			}
			match issue.severity {
				Severity::Error => self.errors += 1,
				Severity::Warning => self.warnings += 1,
			}
		}
	}

	pub fn total_issues(&self) -> usize {
		self.order_issues + self.linkage_issues + self.completeness_issues
	}
}

/// Full structured result of a validation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
	pub generated_at: DateTime<Utc>,
	pub summary: Summary,
	/// Order issues, then linkage issues, then completeness issues.
	pub issues: Vec<Issue>,
}

impl Report {
	pub fn issues_for(&self, check: Check) -> impl Iterator<Item = &Issue> + '_ {
		self.issues.iter().filter(move |issue| issue.check == check)
	}

	/// Console summary, one line per check.
	pub fn render_summary(&self) -> String {
		let s = &self.summary;
		let mut out = String::new();
		let _ = writeln!(
			out,
			"Validated {} parameters, {} formulas, {} phases ({} simulations)",
			s.parameters, s.formulas, s.phases, s.simulations
		);
		let _ = writeln!(out, "  order issues:        {}", s.order_issues);
		let _ = writeln!(out, "  linkage issues:      {}", s.linkage_issues);
		let _ = writeln!(out, "  completeness issues: {}", s.completeness_issues);
		let _ = write!(out, "  ({} errors, {} warnings)", s.errors, s.warnings);
		out
	}
}

/// Terminal state of a validation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationOutcome {
	pub report: Report,
	/// True when any issue has [`Severity::Error`].
	pub has_fatal_issues: bool,
}
