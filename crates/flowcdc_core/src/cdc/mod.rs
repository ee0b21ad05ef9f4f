mod address;
mod compression;
mod decode;
mod document;
mod error;
mod event;
mod format;
mod kind;
mod stats;

/// Address normalization helpers.
pub use address::{AddressStyle, normalize_address, normalize_evm_address, normalize_flow_address};
/// Compression detection result.
pub use compression::Compression;
/// Tagged-value decoding entry points and options.
pub use decode::{DecodeOptions, decode, decode_with};
/// Loaded input document.
pub use document::CdcDocument;
/// Error and result aliases.
pub use error::{CdcError, Result};
/// Event type parsing and payload extraction.
pub use event::{DecodedEvent, EventType, decode_event_payload, decode_event_value};
/// Display formatting helpers.
pub use format::{js_string, shorten_middle};
/// Tagged-value discriminators.
pub use kind::{Kind, NumericKind};
/// Tag statistics for tagged trees.
pub use stats::{KindStats, scan_kinds};
