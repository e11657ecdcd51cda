mod app;
mod backend;
mod cli;
mod clipboard;
mod keys;
mod logging;
mod render;

use clap::Parser;
use cli::Cli;
use wick_editor::Session;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	logging::setup_tracing(&cli);

	let counts = cli.counts();
	if counts.total() == 0 {
		println!("At least one operator is required to start the interface.");
		return Ok(());
	}

	let session = app::run(Session::new(counts)?)?;
	print!("{}", app::exit_summary(&session));
	Ok(())
}
