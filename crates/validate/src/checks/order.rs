use std::collections::HashSet;

use tracing::trace;

use super::ValidationContext;
use crate::issue::Issue;

/// Checks that every simulation input is available when its phase starts.
///
/// Phases run in ascending `order`. Outputs of a phase become available only after every phase
/// sharing its `order` value has been checked, so siblings never satisfy each other. The
/// available set starts with the configured baseline plus registry entries whose status is
/// listed in `baseline_statuses`.
pub fn check_order(ctx: &ValidationContext<'_>) -> Vec<Issue> {
	let mut available: HashSet<&str> = ctx.options.baseline_params.iter().map(String::as_str).collect();
	if !ctx.options.baseline_statuses.is_empty() {
		available.extend(
			ctx.input
				.registry
				.iter()
				.filter(|entry| ctx.options.baseline_statuses.contains(&entry.status))
				.map(|entry| entry.path.as_str()),
		);
	}

	let mut issues = Vec::new();
	for group in ctx.input.structure.order_groups() {
		let mut produced: Vec<&str> = Vec::new();
		for phase in &group.phases {
			for sim in &phase.simulations {
				let mut seen = HashSet::new();
				let missing: Vec<String> = sim
					.inputs
					.iter()
					.map(String::as_str)
					.filter(|input| !available.contains(input) && seen.insert(*input))
					.map(str::to_string)
					.collect();
				if !missing.is_empty() {
					issues.push(Issue::missing_input(&phase.name, &sim.name, missing));
				}
				produced.extend(sim.outputs.iter().map(String::as_str));
			}
		}
		trace!(order = group.order, produced = produced.len(), "order group complete");
		available.extend(produced);
	}
	issues
}
