use serde_json::json;

use super::{PrintOptions, render_value};

#[test]
fn renders_type_header_and_fields() {
	let value = json!({"x": "5", "flag": true, "_type": "A.01.Foo"});
	let rendered = render_value(&value, "_type", PrintOptions::default());
	assert_eq!(rendered, "A.01.Foo {\n  x = \"5\"\n  flag = true\n}");
}

#[test]
fn non_string_type_key_stays_a_field() {
	let value = json!({"_type": 3});
	let rendered = render_value(&value, "_type", PrintOptions::default());
	assert_eq!(rendered, "{\n  _type = 3\n}");
}

#[test]
fn nests_containers_on_their_own_lines() {
	let value = json!({"keys": ["0", null]});
	let rendered = render_value(&value, "_type", PrintOptions::default());
	assert_eq!(rendered, "{\n  keys =\n    [\n      \"0\"\n      null\n    ]\n}");
}

#[test]
fn truncates_arrays_and_depth() {
	let options = PrintOptions {
		max_array_items: 2,
		max_print_depth: 2,
		..PrintOptions::default()
	};
	let value = json!([1, 2, 3, [[4]]]);
	let rendered = render_value(&value, "_type", options);
	assert_eq!(rendered, "[\n  1\n  2\n  ... 2 more\n]");

	let nested = json!([[[1, 2]]]);
	let rendered = render_value(&nested, "_type", options);
	assert_eq!(rendered, "[\n  [\n    [... 2 items]\n  ]\n]");
}

#[test]
fn truncates_fields_and_strings() {
	let options = PrintOptions {
		max_fields_per_object: 1,
		max_string_len: 3,
		..PrintOptions::default()
	};
	let value = json!({"a": "abcdef", "b": 1});
	let rendered = render_value(&value, "_type", options);
	assert_eq!(rendered, "{\n  a = \"abc...\"\n  ... 1 more fields\n}");
}

#[test]
fn short_hex_elides_long_hashes_only() {
	let options = PrintOptions {
		short_hex: true,
		..PrintOptions::default()
	};
	let value = json!(["0x000000000000000000000002a7a1f3b4a4b0a8c2", "0x1e3c78c6d580273b"]);
	let rendered = render_value(&value, "_type", options);
	assert_eq!(rendered, "[\n  \"0x00000000\u{2026}a4b0a8c2\"\n  \"0x1e3c78c6d580273b\"\n]");
}
