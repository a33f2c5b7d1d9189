//! `keystone-validate` binary.
//!
//! Reads the registry document and simulation structure from a project directory, runs the
//! order, linkage and completeness checks, prints a summary and writes the full report to
//! `reports/dependency_validation.json`.

mod cli;
mod run;

use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use crate::cli::Args;

fn main() -> anyhow::Result<ExitCode> {
	let args = Args::parse();
	setup_tracing(args.verbose);

	let output = run::run(&args)?;
	println!("{}", output.outcome.report.render_summary());
	info!(path = %output.report_path.display(), "report written");

	Ok(ExitCode::from(run::exit_status(args.strict, &output.outcome)))
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(verbose)
		.init();
}
