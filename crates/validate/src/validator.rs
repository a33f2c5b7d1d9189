//! Validation run state machine.
//!
//! Each state is a distinct type, so a run cannot be validated twice, reported before it is
//! validated, or re-entered after reporting.

use chrono::Utc;
use tracing::{debug, info};

use crate::checks::{ValidationContext, check_completeness, check_linkage, check_order};
use crate::input::ValidationInput;
use crate::issue::Issue;
use crate::options::ValidationOptions;
use crate::report::{Report, Summary, ValidationOutcome};

/// No input yet.
#[derive(Debug)]
pub struct Idle;

/// Input frozen, checks not yet run.
#[derive(Debug)]
pub struct Loaded {
	input: ValidationInput,
}

/// All checks have run.
#[derive(Debug)]
pub struct Validated {
	summary: Summary,
	issues: Vec<Issue>,
}

#[derive(Debug)]
pub struct Validator<S> {
	options: ValidationOptions,
	state: S,
}

impl Validator<Idle> {
	pub fn new(options: ValidationOptions) -> Self {
		Self { options, state: Idle }
	}

	pub fn load(self, input: ValidationInput) -> Validator<Loaded> {
		debug!(
			parameters = input.registry.len(),
			formulas = input.formulas.len(),
			phases = input.structure.phases().len(),
			"validation input loaded"
		);
		Validator {
			options: self.options,
			state: Loaded { input },
		}
	}
}

impl Validator<Loaded> {
	/// Runs the order, linkage and completeness checks in one pass.
	pub fn validate(self) -> Validator<Validated> {
		let input = &self.state.input;
		let ctx = ValidationContext::new(input, &self.options);

		let order = check_order(&ctx);
		let linkage = check_linkage(&ctx);
		let completeness = check_completeness(&ctx);
		info!(
			order = order.len(),
			linkage = linkage.len(),
			completeness = completeness.len(),
			"validation checks complete"
		);

		let mut issues = order;
		issues.extend(linkage);
		issues.extend(completeness);

		let mut summary = Summary {
			parameters: input.registry.len(),
			formulas: input.formulas.len(),
			phases: input.structure.phases().len(),
			simulations: input.structure.simulations().count(),
			parameters_by_status: input.registry.count_by_status(),
			..Summary::default()
		};
		summary.tally(&issues);

		Validator {
			options: self.options,
			state: Validated { summary, issues },
		}
	}
}

impl Validator<Validated> {
	pub fn issues(&self) -> &[Issue] {
		&self.state.issues
	}

	pub fn report(self) -> ValidationOutcome {
		let Validated { summary, issues } = self.state;
		let has_fatal_issues = issues.iter().any(Issue::is_error);
		ValidationOutcome {
			report: Report {
				generated_at: Utc::now(),
				summary,
				issues,
			},
			has_fatal_issues,
		}
	}
}

/// Runs a complete validation pass.
pub fn validate(input: ValidationInput, options: ValidationOptions) -> ValidationOutcome {
	Validator::new(options).load(input).validate().report()
}
