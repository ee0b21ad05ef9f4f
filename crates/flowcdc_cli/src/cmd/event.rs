use std::path::PathBuf;

use flowcdc::cdc::{CdcDocument, Result, decode_event_value};
use serde_json::Value;

use crate::cmd::print::{PrintOptions, render_value};
use crate::cmd::util::{DecodeFlags, print_json};

#[derive(clap::Args)]
pub struct Args {
	/// Raw event payload, or `-` for stdin.
	pub path: PathBuf,
	#[command(flatten)]
	pub decode: DecodeFlags,
	/// Emit JSON instead of a field listing.
	#[arg(long)]
	pub json: bool,
}

/// Decode a JSON-CDC event payload and print its type and fields.
pub fn run(args: Args) -> Result<()> {
	let Args { path, decode, json } = args;

	let options = decode.to_options();
	let doc = CdcDocument::open(&path)?;
	let event = decode_event_value(&doc.value, &options)?;

	if json {
		return print_json(&event, false);
	}

	let event_type = event.event_type.as_ref();
	println!("type_id: {}", event.type_id.as_deref().unwrap_or("-"));
	println!("address: {}", event_type.and_then(|parsed| parsed.address.as_deref()).unwrap_or("-"));
	println!("contract: {}", event_type.and_then(|parsed| parsed.contract.as_deref()).unwrap_or("-"));
	println!("event: {}", event_type.map_or("-", |parsed| parsed.event.as_str()));
	println!("fields:");
	println!("{}", render_value(&Value::Object(event.fields), &options.type_key, PrintOptions::for_event_fields()));

	Ok(())
}
