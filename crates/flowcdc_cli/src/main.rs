#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "flowcdc", about = "Cadence JSON-CDC inspection tools")]
struct Cli {
	/// Verbose logging
	#[arg(short, long, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Summarize the tags in a document.
	Info(cmd::info::Args),
	/// Print a document as plain JSON.
	Decode(cmd::decode::Args),
	/// Print a document as a truncated tree.
	Show(cmd::show::Args),
	/// Decode a raw event payload.
	Event(cmd::event::Args),
	/// Normalize an account address.
	Address(cmd::address::Args),
}

fn main() {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(command: Commands) -> flowcdc::cdc::Result<()> {
	match command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Show(args) => cmd::show::run(args),
		Commands::Event(args) => cmd::event::run(args),
		Commands::Address(args) => cmd::address::run(args),
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("flowcdc=debug,warn")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
