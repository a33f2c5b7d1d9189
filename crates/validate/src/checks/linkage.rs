use super::ValidationContext;
use crate::issue::Issue;

/// Checks that formula inputs and outputs are traceable to a producer.
///
/// Existence only; phase order is not considered here.
///
/// - input: registry path, any simulation output, or another formula's id (never its own)
/// - output: registry path, the formula's own id, or any simulation output
pub fn check_linkage(ctx: &ValidationContext<'_>) -> Vec<Issue> {
	let mut issues = Vec::new();
	for formula in ctx.input.formulas.iter() {
		for input in &formula.input_params {
			let other_formula = *input != formula.id && ctx.is_formula(input);
			if !(ctx.in_registry(input) || ctx.simulated(input) || other_formula) {
				issues.push(Issue::link_missing_input(&formula.id, input));
			}
		}
		for output in &formula.output_params {
			if !(ctx.in_registry(output) || *output == formula.id || ctx.simulated(output)) {
				issues.push(Issue::unregistered_output(&formula.id, output));
			}
		}
	}
	issues
}
