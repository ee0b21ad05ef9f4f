use flowcdc::cdc::shorten_middle;
use serde_json::{Map, Value};

const SHORT_HEX_MIN_LEN: usize = 24;

/// Output truncation and formatting limits for decoded values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of fields printed for a single object.
	pub max_fields_per_object: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for arrays.
	pub max_array_items: usize,
	/// Maximum recursive print depth for nested arrays/objects.
	pub max_print_depth: u32,
	/// Elide the middle of long `0x` hex strings.
	pub short_hex: bool,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_fields_per_object: 80,
			max_string_len: 200,
			max_array_items: 16,
			max_print_depth: 6,
			short_hex: false,
		}
	}
}

impl PrintOptions {
	/// Preset tuned for event field listings.
	pub fn for_event_fields() -> Self {
		Self {
			max_fields_per_object: 40,
			max_string_len: 160,
			max_array_items: 8,
			max_print_depth: 4,
			short_hex: false,
		}
	}
}

/// Render one decoded value tree as indented text lines.
///
/// Objects carrying a string under `type_key` print it as a header instead
/// of as a field.
pub fn render_value(value: &Value, type_key: &str, options: PrintOptions) -> String {
	let mut lines = Vec::new();
	push_value(&mut lines, value, 0, 0, type_key, options);
	lines.join("\n")
}

fn push_value(lines: &mut Vec<String>, value: &Value, indent: usize, depth: u32, type_key: &str, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Array(items) => {
			if depth >= options.max_print_depth {
				lines.push(format!("{pad}[... {} items]", items.len()));
				return;
			}
			lines.push(format!("{pad}["));
			for item in items.iter().take(options.max_array_items) {
				push_value(lines, item, indent + 2, depth + 1, type_key, options);
			}
			if items.len() > options.max_array_items {
				lines.push(format!("{pad}  ... {} more", items.len() - options.max_array_items));
			}
			lines.push(format!("{pad}]"));
		}
		Value::Object(map) => {
			let type_id = header_type(map, type_key);
			let header = type_id.map(|id| format!("{id} ")).unwrap_or_default();
			if depth >= options.max_print_depth {
				lines.push(format!("{pad}{header}{{ ... }}"));
				return;
			}
			lines.push(format!("{pad}{header}{{"));

			let fields: Vec<_> = map
				.iter()
				.filter(|(key, _)| type_id.is_none() || key.as_str() != type_key)
				.collect();
			for (key, item) in fields.iter().take(options.max_fields_per_object) {
				if matches!(item, Value::Array(_) | Value::Object(_)) {
					lines.push(format!("{pad}  {key} ="));
					push_value(lines, item, indent + 4, depth + 1, type_key, options);
				} else {
					lines.push(format!("{pad}  {key} = {}", scalar_text(item, options)));
				}
			}
			if fields.len() > options.max_fields_per_object {
				lines.push(format!("{pad}  ... {} more fields", fields.len() - options.max_fields_per_object));
			}
			lines.push(format!("{pad}}}"));
		}
		scalar => lines.push(format!("{pad}{}", scalar_text(scalar, options))),
	}
}

fn header_type<'a>(map: &'a Map<String, Value>, type_key: &str) -> Option<&'a str> {
	map.get(type_key).and_then(Value::as_str)
}

fn scalar_text(value: &Value, options: PrintOptions) -> String {
	match value {
		Value::String(text) => format!("\"{}\"", display_string(text, options)),
		other => other.to_string(),
	}
}

fn display_string(input: &str, options: PrintOptions) -> String {
	if options.short_hex && is_long_hex(input) {
		return shorten_middle(input, 10, 8);
	}
	truncate(input, options.max_string_len)
}

fn is_long_hex(input: &str) -> bool {
	input
		.strip_prefix("0x")
		.is_some_and(|hex| input.len() >= SHORT_HEX_MIN_LEN && hex.bytes().all(|byte| byte.is_ascii_hexdigit()))
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}

#[cfg(test)]
mod tests;
