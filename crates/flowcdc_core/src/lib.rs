//! Public library API for decoding Cadence JSON-CDC values.

/// JSON-CDC decoding, address normalization, event helpers, and document loading.
pub mod cdc;
