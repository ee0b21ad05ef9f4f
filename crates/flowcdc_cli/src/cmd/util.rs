use flowcdc::cdc::{AddressStyle, DecodeOptions, Result};
use serde::Serialize;

/// Decode switches shared by commands that decode documents.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct DecodeFlags {
	/// Render addresses without the `0x` prefix.
	#[arg(long = "bare-addresses")]
	pub bare_addresses: bool,
	/// Decode `Contract` and `Enum` values field-by-field.
	#[arg(long = "extended-composites")]
	pub extended_composites: bool,
	/// Use the indexer preset (bare addresses, extended composites).
	#[arg(long)]
	pub indexer: bool,
	/// Key used for composite type identifiers.
	#[arg(long = "type-key")]
	pub type_key: Option<String>,
}

impl DecodeFlags {
	/// Build decode options from flags, starting from the selected preset.
	pub fn to_options(&self) -> DecodeOptions {
		let mut options = if self.indexer { DecodeOptions::for_indexer() } else { DecodeOptions::default() };
		if self.bare_addresses {
			options.address_style = AddressStyle::Bare;
		}
		if self.extended_composites {
			options.extended_composites = true;
		}
		if let Some(type_key) = &self.type_key {
			options.type_key = type_key.clone();
		}
		options
	}
}

/// Print a serializable value as JSON on stdout.
pub(crate) fn print_json(value: &impl Serialize, compact: bool) -> Result<()> {
	let text = if compact { serde_json::to_string(value)? } else { serde_json::to_string_pretty(value)? };
	println!("{text}");
	Ok(())
}
