use std::path::PathBuf;

use flowcdc::cdc::{CdcDocument, Result, decode_with};

use crate::cmd::print::{PrintOptions, render_value};
use crate::cmd::util::DecodeFlags;

#[derive(clap::Args)]
pub struct Args {
	/// Input document, or `-` for stdin.
	pub path: PathBuf,
	#[command(flatten)]
	pub decode: DecodeFlags,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long = "max-array")]
	pub max_array: Option<usize>,
	#[arg(long = "max-fields")]
	pub max_fields: Option<usize>,
	#[arg(long = "max-string")]
	pub max_string: Option<usize>,
	/// Elide the middle of long hex strings.
	#[arg(long = "short-hex")]
	pub short_hex: bool,
}

/// Decode a document and print it as an indented tree.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		decode,
		max_depth,
		max_array,
		max_fields,
		max_string,
		short_hex,
	} = args;

	let mut print = PrintOptions::default();
	if let Some(max_depth) = max_depth {
		print.max_print_depth = max_depth;
	}
	if let Some(max_array) = max_array {
		print.max_array_items = max_array;
	}
	if let Some(max_fields) = max_fields {
		print.max_fields_per_object = max_fields;
	}
	if let Some(max_string) = max_string {
		print.max_string_len = max_string;
	}
	print.short_hex = short_hex;

	let options = decode.to_options();
	let doc = CdcDocument::open(&path)?;
	let value = decode_with(&doc.value, &options);

	println!("path: {}", path.display());
	println!("decoded:");
	println!("{}", render_value(&value, &options.type_key, print));

	Ok(())
}
