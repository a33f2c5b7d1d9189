use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "keystone-validate")]
#[command(about = "Check phase ordering, formula linkage and key-parameter completeness")]
#[command(version)]
pub struct Args {
	/// Project directory holding the registry and structure documents
	#[arg(short, long, value_name = "PATH", default_value = ".")]
	pub dir: PathBuf,

	/// Config file (defaults to keystone.toml in the project directory)
	#[arg(short, long, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Exit with status 2 when the report contains errors
	#[arg(long)]
	pub strict: bool,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}
