use flowcdc::cdc::{AddressStyle, CdcError, Result, normalize_evm_address, normalize_flow_address};

/// Output form for the `address` command.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Style {
	/// `0x` + lowercase hex.
	Prefixed,
	/// Lowercase hex without `0x`.
	Bare,
	/// 16-char Flow address, zero-padded.
	Flow,
	/// 40-char EVM address, zero-padded.
	Evm,
}

#[derive(clap::Args)]
pub struct Args {
	/// Address text as found in a payload.
	pub input: String,
	#[arg(long, value_enum, default_value_t = Style::Prefixed)]
	pub style: Style,
}

/// Normalize one address and print it.
pub fn run(args: Args) -> Result<()> {
	let Args { input, style } = args;
	println!("{}", normalize(&input, style)?);
	Ok(())
}

pub(crate) fn normalize(input: &str, style: Style) -> Result<String> {
	match style {
		Style::Prefixed => Ok(AddressStyle::Prefixed.apply(input)),
		Style::Bare => Ok(AddressStyle::Bare.apply(input)),
		Style::Flow => normalize_flow_address(input).ok_or_else(|| invalid("flow", input)),
		Style::Evm => normalize_evm_address(input).ok_or_else(|| invalid("evm", input)),
	}
}

fn invalid(style: &'static str, input: &str) -> CdcError {
	CdcError::InvalidAddress {
		style,
		input: input.to_owned(),
	}
}
