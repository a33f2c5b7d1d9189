use std::collections::BTreeSet;

use super::ValidationContext;
use crate::issue::Issue;

/// Reports key parameters that neither a simulation nor the registry produces.
///
/// Issues are sorted by path, so the result does not depend on the order of `key_params`.
pub fn check_completeness(ctx: &ValidationContext<'_>) -> Vec<Issue> {
	ctx.options
		.key_params
		.iter()
		.map(String::as_str)
		.filter(|param| !(ctx.simulated(param) || ctx.in_registry(param)))
		.collect::<BTreeSet<_>>()
		.into_iter()
		.map(Issue::missing_key_param)
		.collect()
}
