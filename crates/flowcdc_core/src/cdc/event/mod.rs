use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::cdc::decode::decode_fields;
use crate::cdc::{CdcError, DecodeOptions, Result};

/// Parsed form of a Cadence event type identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventType {
	/// Deploying account for contract events (`A.<address>.<contract>.<event>`).
	pub address: Option<String>,
	/// Contract name, or the `flow` namespace for protocol events.
	pub contract: Option<String>,
	/// Event name.
	pub event: String,
}

impl EventType {
	/// Split `A.<address>.<contract>.<event>` or `<namespace>.<event>`.
	///
	/// Anything else is kept whole as the event name.
	pub fn parse(type_id: &str) -> Self {
		let parts: Vec<&str> = type_id.split('.').collect();
		match parts.as_slice() {
			["A", address, contract, event, ..] => Self {
				address: Some((*address).to_owned()),
				contract: Some((*contract).to_owned()),
				event: (*event).to_owned(),
			},
			[contract, event, ..] => Self {
				address: None,
				contract: Some((*contract).to_owned()),
				event: (*event).to_owned(),
			},
			_ => Self {
				address: None,
				contract: None,
				event: type_id.to_owned(),
			},
		}
	}
}

/// Event payload with decoded fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedEvent {
	/// Raw type identifier, when the payload carried one.
	pub type_id: Option<String>,
	/// Parsed type identifier.
	pub event_type: Option<EventType>,
	/// Field name to decoded value, in payload order.
	pub fields: Map<String, Value>,
}

/// Parse and decode a raw JSON-CDC event payload (`{type, value: {id, fields}}`).
pub fn decode_event_payload(bytes: &[u8], opt: &DecodeOptions) -> Result<DecodedEvent> {
	let raw: Value = serde_json::from_slice(bytes)?;
	decode_event_value(&raw, opt)
}

/// Decode an already-parsed JSON-CDC event payload.
pub fn decode_event_value(raw: &Value, opt: &DecodeOptions) -> Result<DecodedEvent> {
	let Value::Object(root) = raw else {
		return Err(CdcError::EventPayloadNotObject { got: json_kind(raw) });
	};

	let inner = root.get("value").and_then(Value::as_object);
	let fields = inner
		.and_then(|inner| inner.get("fields"))
		.and_then(Value::as_array)
		.ok_or(CdcError::EventPayloadMissingFields)?;

	let type_id = inner
		.and_then(|inner| inner.get("id"))
		.and_then(Value::as_str)
		.filter(|id| !id.is_empty())
		.map(str::to_owned);
	let event_type = type_id.as_deref().map(EventType::parse);

	let fields = decode_fields(fields, opt);
	debug!(type_id = type_id.as_deref().unwrap_or(""), fields = fields.len(), "decoded event payload");

	Ok(DecodedEvent { type_id, event_type, fields })
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
