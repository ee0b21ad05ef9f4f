use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, CdcError>;

/// Errors produced while loading documents and extracting event payloads.
///
/// Decoding a value never fails; these cover the layers around it.
#[derive(Debug, Error)]
pub enum CdcError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input was not valid JSON.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Input contained no bytes.
	#[error("empty input")]
	EmptyInput,
	/// Event payload root was not a JSON object.
	#[error("event payload is not an object (got {got})")]
	EventPayloadNotObject {
		/// JSON kind found at the root.
		got: &'static str,
	},
	/// Event payload had no `value.fields` array.
	#[error("event payload has no fields array")]
	EventPayloadMissingFields,
	/// Address input could not be normalized for the requested style.
	#[error("invalid {style} address: {input:?}")]
	InvalidAddress {
		/// Requested normalization style label.
		style: &'static str,
		/// Original user-provided input.
		input: String,
	},
}
