use serde_json::{Map, Value};
use tracing::trace;

use crate::cdc::format::{is_truthy, js_string};
use crate::cdc::{AddressStyle, Kind};

/// Reserved key carrying a composite's type identifier.
const DEFAULT_TYPE_KEY: &str = "_type";

static ABSENT: Value = Value::Null;

/// Behavior switches for tagged-value decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
	/// Rendering of decoded `Address` values.
	pub address_style: AddressStyle,
	/// Decode `Contract` and `Enum` like `Struct` instead of passing them through.
	pub extended_composites: bool,
	/// Key under which a composite's `id` is stored.
	pub type_key: String,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			address_style: AddressStyle::Prefixed,
			extended_composites: false,
			type_key: DEFAULT_TYPE_KEY.to_owned(),
		}
	}
}

impl DecodeOptions {
	/// Preset matching how the indexer stores flattened values.
	pub fn for_indexer() -> Self {
		Self {
			address_style: AddressStyle::Bare,
			extended_composites: true,
			type_key: DEFAULT_TYPE_KEY.to_owned(),
		}
	}
}

/// Decode a JSON-CDC value into plain JSON with default options.
pub fn decode(value: &Value) -> Value {
	decode_with(value, &DecodeOptions::default())
}

/// Decode a JSON-CDC value into plain JSON.
///
/// Total over its input: shapes that are not understood are returned
/// unchanged instead of failing.
pub fn decode_with(value: &Value, opt: &DecodeOptions) -> Value {
	match value {
		Value::Array(items) => Value::Array(items.iter().map(|item| decode_with(item, opt)).collect()),
		Value::Object(map) => match tagged_parts(map) {
			Some((tag, payload)) => decode_tagged(tag, payload, opt),
			None => value.clone(),
		},
		_ => value.clone(),
	}
}

/// Split an object into `(type, value)` when its `type` is a string.
///
/// A missing `value` reads as `null`, so `{"type": "Void"}` is tagged.
pub(crate) fn tagged_parts(map: &Map<String, Value>) -> Option<(&str, &Value)> {
	let tag = map.get("type")?.as_str()?;
	Some((tag, map.get("value").unwrap_or(&ABSENT)))
}

fn decode_tagged(tag: &str, payload: &Value, opt: &DecodeOptions) -> Value {
	let kind = Kind::parse(tag);
	match kind {
		Kind::Optional => {
			if is_truthy(payload) {
				decode_with(payload, opt)
			} else {
				Value::Null
			}
		}
		Kind::Array => match payload {
			Value::Array(items) => Value::Array(items.iter().map(|item| decode_with(item, opt)).collect()),
			_ => Value::Array(Vec::new()),
		},
		Kind::Dictionary => decode_dictionary(payload, opt),
		Kind::Struct | Kind::Resource | Kind::Event => decode_composite(tag, payload, opt),
		Kind::Contract | Kind::Enum if opt.extended_composites => decode_composite(tag, payload, opt),
		Kind::Path => decode_path(payload),
		Kind::Type => decode_type(payload),
		Kind::Address => decode_address(payload, opt.address_style),
		Kind::Bool => Value::Bool(is_truthy(payload)),
		Kind::Numeric(_) => payload.clone(),
		Kind::Unknown => {
			trace!(tag, "passing through unrecognized kind");
			payload.clone()
		}
		_ => payload.clone(),
	}
}

fn decode_dictionary(payload: &Value, opt: &DecodeOptions) -> Value {
	let Value::Array(entries) = payload else {
		return Value::Object(Map::new());
	};

	let mut out = Map::with_capacity(entries.len());
	for entry in entries {
		let Value::Object(entry) = entry else {
			continue;
		};
		let key = decode_with(entry.get("key").unwrap_or(&Value::Null), opt);
		let value = decode_with(entry.get("value").unwrap_or(&Value::Null), opt);
		// Later entries overwrite earlier ones but keep the first position.
		out.insert(js_string(&key), value);
	}
	Value::Object(out)
}

fn decode_composite(tag: &str, payload: &Value, opt: &DecodeOptions) -> Value {
	let (fields, type_id) = match payload {
		Value::Object(inner) => match inner.get("fields") {
			Some(Value::Array(fields)) => (fields, inner.get("id")),
			_ => {
				trace!(tag, "composite payload has no fields array");
				return payload.clone();
			}
		},
		Value::Array(fields) => (fields, None),
		_ => {
			trace!(tag, "composite payload is not an object or array");
			return payload.clone();
		}
	};

	let mut out = decode_fields(fields, opt);
	if let Some(id) = type_id.filter(|id| is_truthy(id)) {
		out.insert(opt.type_key.clone(), id.clone());
	}
	Value::Object(out)
}

/// Decode `[{name, value}, ...]` into a name-to-value map, skipping unnamed entries.
pub(crate) fn decode_fields(fields: &[Value], opt: &DecodeOptions) -> Map<String, Value> {
	let mut out = Map::with_capacity(fields.len());
	for field in fields {
		let Value::Object(field) = field else {
			continue;
		};
		let Some(name) = field.get("name").and_then(Value::as_str) else {
			continue;
		};
		out.insert(name.to_owned(), decode_with(field.get("value").unwrap_or(&Value::Null), opt));
	}
	out
}

/// `/domain/identifier`, else the payload as text.
///
/// Non-string payloads render as compact JSON on purpose, unlike the
/// [`js_string`] form used for dictionary keys.
fn decode_path(payload: &Value) -> Value {
	if let Value::Object(inner) = payload
		&& let Some(domain) = present_text(inner.get("domain"))
		&& let Some(identifier) = present_text(inner.get("identifier"))
	{
		return Value::String(format!("/{domain}/{identifier}"));
	}

	match payload {
		Value::String(text) => Value::String(text.clone()),
		other => Value::String(other.to_string()),
	}
}

fn present_text(value: Option<&Value>) -> Option<String> {
	value.filter(|value| is_truthy(value)).map(js_string)
}

fn decode_type(payload: &Value) -> Value {
	match payload {
		Value::Object(inner) => match inner.get("staticType") {
			Some(Value::Object(static_type)) => match static_type.get("typeID") {
				Some(type_id) if is_truthy(type_id) => type_id.clone(),
				_ => Value::Object(static_type.clone()),
			},
			Some(static_type) if !static_type.is_null() => static_type.clone(),
			_ => payload.clone(),
		},
		other if is_truthy(other) => other.clone(),
		_ => Value::String(String::new()),
	}
}

fn decode_address(payload: &Value, style: AddressStyle) -> Value {
	let normalized = match payload {
		Value::String(text) => style.apply(text),
		other if is_truthy(other) => style.apply(&js_string(other)),
		_ => String::new(),
	};
	Value::String(normalized)
}
