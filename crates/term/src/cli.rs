//! CLI schema for the wick binary.

use std::path::PathBuf;

use clap::Parser;
use wick_primitives::OperatorCounts;

#[derive(Parser, Debug)]
#[command(name = "wick")]
#[command(about = "Interactive editor for Wick contractions")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Number of input state operators
	#[arg(long, default_value_t = 2, value_name = "N")]
	pub inputs: usize,

	/// Number of interaction term operators
	#[arg(long, default_value_t = 6, value_name = "N")]
	pub interactions: usize,

	/// Number of external state operators
	#[arg(long, default_value_t = 2, value_name = "N")]
	pub externals: usize,

	/// Write logs to this file (defaults to $WICK_LOG_DIR/wick.<pid>.log when set)
	#[arg(long, value_name = "PATH")]
	pub log_file: Option<PathBuf>,

	/// Log at debug level
	#[arg(long, short = 'v')]
	pub verbose: bool,
}

impl Cli {
	/// Operator counts requested on the command line.
	pub fn counts(&self) -> OperatorCounts {
		OperatorCounts::new(self.inputs, self.interactions, self.externals)
	}
}
