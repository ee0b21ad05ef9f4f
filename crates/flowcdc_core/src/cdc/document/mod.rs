use std::fs;
use std::io::Read;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::cdc::compression::decode_bytes;
use crate::cdc::{Compression, Result};

/// A parsed JSON-CDC input document.
#[derive(Debug, Clone)]
pub struct CdcDocument {
	/// Compression detected on the raw input.
	pub compression: Compression,
	/// Size of the JSON text after decompression.
	pub byte_len: usize,
	/// Parsed JSON, still in tagged form.
	pub value: Value,
}

impl CdcDocument {
	/// Read and parse a document from disk; `-` reads stdin.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let raw = if path == Path::new("-") {
			let mut buf = Vec::new();
			std::io::stdin().lock().read_to_end(&mut buf)?;
			buf
		} else {
			fs::read(path)?
		};
		debug!(path = %path.display(), bytes = raw.len(), "read input document");
		Self::from_bytes(raw)
	}

	/// Parse a document from raw, possibly compressed, bytes.
	pub fn from_bytes(raw: Vec<u8>) -> Result<Self> {
		let (compression, bytes) = decode_bytes(raw)?;
		let value = serde_json::from_slice(&bytes)?;
		debug!(compression = compression.as_str(), bytes = bytes.len(), "parsed input document");

		Ok(Self {
			compression,
			byte_len: bytes.len(),
			value,
		})
	}
}
