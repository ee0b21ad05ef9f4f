use std::path::PathBuf;

use flowcdc::cdc::{CdcDocument, Result, decode_with};

use crate::cmd::util::{DecodeFlags, print_json};

#[derive(clap::Args)]
pub struct Args {
	/// Input document, or `-` for stdin.
	pub path: PathBuf,
	#[command(flatten)]
	pub decode: DecodeFlags,
	/// Print single-line JSON.
	#[arg(long)]
	pub compact: bool,
}

/// Decode a whole document and print it as plain JSON.
pub fn run(args: Args) -> Result<()> {
	let Args { path, decode, compact } = args;

	let doc = CdcDocument::open(&path)?;
	let value = decode_with(&doc.value, &decode.to_options());
	print_json(&value, compact)
}
