/// Numeric JSON-CDC kinds, all carried on the wire as decimal strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
	/// Signed integer; `bits == None` is the arbitrary-precision `Int`.
	Int {
		/// Declared bit width, if any.
		bits: Option<u16>,
	},
	/// Unsigned integer; `bits == None` is the arbitrary-precision `UInt`.
	UInt {
		/// Declared bit width, if any.
		bits: Option<u16>,
	},
	/// Wrapping unsigned integer.
	Word {
		/// Declared bit width.
		bits: u16,
	},
	/// Signed 64-bit fixed-point decimal.
	Fix64,
	/// Unsigned 64-bit fixed-point decimal.
	UFix64,
}

impl NumericKind {
	fn parse(tag: &str) -> Option<Self> {
		match tag {
			"Fix64" => return Some(Self::Fix64),
			"UFix64" => return Some(Self::UFix64),
			_ => {}
		}

		if let Some(rest) = tag.strip_prefix("UInt") {
			return parse_width(rest).map(|bits| Self::UInt { bits });
		}
		if let Some(rest) = tag.strip_prefix("Int") {
			return parse_width(rest).map(|bits| Self::Int { bits });
		}
		if let Some(rest) = tag.strip_prefix("Word") {
			return match parse_width(rest) {
				Some(Some(bits)) => Some(Self::Word { bits }),
				_ => None,
			};
		}
		None
	}
}

/// `""` means unbounded; otherwise all digits without a leading zero.
fn parse_width(rest: &str) -> Option<Option<u16>> {
	if rest.is_empty() {
		return Some(None);
	}
	if !rest.bytes().all(|byte| byte.is_ascii_digit()) || rest.starts_with('0') {
		return None;
	}
	rest.parse::<u16>().ok().map(Some)
}

/// Discriminator carried in the `type` member of a tagged value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// Possibly-absent inner value.
	Optional,
	/// Ordered sequence.
	Array,
	/// Ordered key/value pairs.
	Dictionary,
	/// Composite struct.
	Struct,
	/// Composite resource.
	Resource,
	/// Composite event.
	Event,
	/// Composite contract value.
	Contract,
	/// Composite enum case.
	Enum,
	/// Storage path (`domain` + `identifier`).
	Path,
	/// Runtime type value.
	Type,
	/// Account address.
	Address,
	/// Boolean.
	Bool,
	/// UTF-8 string.
	String,
	/// Single grapheme.
	Character,
	/// Unit value.
	Void,
	/// Capability reference.
	Capability,
	/// Integer or fixed-point number.
	Numeric(NumericKind),
	/// Tag this crate does not recognize.
	Unknown,
}

impl Kind {
	/// Parse a JSON-CDC `type` tag.
	pub fn parse(tag: &str) -> Self {
		match tag {
			"Optional" => Self::Optional,
			"Array" => Self::Array,
			"Dictionary" => Self::Dictionary,
			"Struct" => Self::Struct,
			"Resource" => Self::Resource,
			"Event" => Self::Event,
			"Contract" => Self::Contract,
			"Enum" => Self::Enum,
			"Path" => Self::Path,
			"Type" => Self::Type,
			"Address" => Self::Address,
			"Bool" => Self::Bool,
			"String" => Self::String,
			"Character" => Self::Character,
			"Void" => Self::Void,
			"Capability" => Self::Capability,
			other => NumericKind::parse(other).map_or(Self::Unknown, Self::Numeric),
		}
	}

	/// Composite kinds that are always decoded field-by-field.
	pub fn is_composite(self) -> bool {
		matches!(self, Self::Struct | Self::Resource | Self::Event)
	}

	/// Composite kinds only some producers emit.
	pub fn is_extended_composite(self) -> bool {
		matches!(self, Self::Contract | Self::Enum)
	}
}
