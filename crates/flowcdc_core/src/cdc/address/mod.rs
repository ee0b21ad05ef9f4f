const FLOW_HEX_LEN: usize = 16;
const EVM_HEX_LEN: usize = 40;

/// How decoded `Address` values are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AddressStyle {
	/// `0x` followed by lowercase hex, as shown in explorers.
	#[default]
	Prefixed,
	/// Lowercase hex without the `0x` prefix, as stored by indexers.
	Bare,
}

impl AddressStyle {
	/// Normalize `input` in this style; empty input yields an empty string.
	pub fn apply(self, input: &str) -> String {
		match self {
			Self::Prefixed => normalize_address(input),
			Self::Bare => strip_hex_prefix(&input.to_ascii_lowercase()).to_owned(),
		}
	}
}

/// Lowercase `input` and ensure a single `0x` prefix.
///
/// Leading zeros are preserved; no length checks are applied.
pub fn normalize_address(input: &str) -> String {
	if input.is_empty() {
		return String::new();
	}
	let lower = input.to_ascii_lowercase();
	format!("0x{}", strip_hex_prefix(&lower))
}

/// Normalize a Flow address to 16 lowercase hex chars without `0x`.
///
/// Accepts `0x`-prefixed or bare input, wrapper strings such as
/// `Optional(0x1e3c78c6d580273b)`, and short forms like `0x1`, which are
/// left-padded. EVM-length input is rejected.
pub fn normalize_flow_address(input: &str) -> Option<String> {
	let hex = clean_hex(input)?;
	if hex.len() > FLOW_HEX_LEN {
		return None;
	}
	Some(format!("{hex:0>width$}", width = FLOW_HEX_LEN))
}

/// Normalize an EVM address to 40 lowercase hex chars without `0x`.
///
/// Flow-length input (16 chars or fewer) is kept as-is since COA lookups
/// receive both forms.
pub fn normalize_evm_address(input: &str) -> Option<String> {
	let hex = clean_hex(input)?;
	if hex.len() > EVM_HEX_LEN {
		return None;
	}
	if hex.len() > FLOW_HEX_LEN {
		return Some(format!("{hex:0>width$}", width = EVM_HEX_LEN));
	}
	Some(hex.to_owned())
}

fn strip_hex_prefix(lower: &str) -> &str {
	lower.strip_prefix("0x").unwrap_or(lower)
}

/// Lowercased hex run after the first `0x` (a doubled `0x0x` counts once),
/// cut at the first non-hex char.
fn clean_hex(input: &str) -> Option<String> {
	let lower = input.trim().to_ascii_lowercase();
	if matches!(lower.as_str(), "" | "nil" | "<nil>" | "null") {
		return None;
	}

	let tail = match lower.find("0x") {
		Some(idx) => strip_hex_prefix(&lower[idx + 2..]),
		None => lower.as_str(),
	};
	let end = tail.find(|ch: char| !ch.is_ascii_hexdigit()).unwrap_or(tail.len());
	let hex = &tail[..end];
	if hex.is_empty() {
		return None;
	}
	Some(hex.to_owned())
}
