use serde_json::json;

use crate::cdc::scan_kinds;

#[test]
fn plain_json_has_no_tags() {
	let stats = scan_kinds(&json!({"a": [1, 2, {"b": null}]}));
	assert_eq!(stats.top_kind, None);
	assert_eq!(stats.tagged_nodes, 0);
	assert_eq!(stats.max_depth, 0);
	assert!(stats.kinds.is_empty());
}

#[test]
fn counts_nested_tags_and_depth() {
	let stats = scan_kinds(&json!({
		"type": "Optional",
		"value": {"type": "Array", "value": [{"type": "Int", "value": "1"}, {"type": "Int", "value": "2"}]}
	}));
	assert_eq!(stats.top_kind.as_deref(), Some("Optional"));
	assert_eq!(stats.tagged_nodes, 4);
	assert_eq!(stats.max_depth, 3);
	assert_eq!(stats.kinds["Int"], 2);
	assert_eq!(stats.ranked().first(), Some(&("Int", 2)));
}

#[test]
fn unknown_kinds_are_not_descended() {
	let stats = scan_kinds(&json!({"type": "FutureKind", "value": {"type": "Int", "value": "1"}}));
	assert_eq!(stats.tagged_nodes, 1);
	assert_eq!(stats.unknown["FutureKind"], 1);
	assert!(!stats.kinds.contains_key("Int"));
}

#[test]
fn account_info_fixture_counts() {
	let raw = flowcdc_testkit::fixture_json("scripts/account_info.json");
	let stats = scan_kinds(&raw);

	assert_eq!(stats.top_kind.as_deref(), Some("Struct"));
	assert_eq!(stats.tagged_nodes, 20);
	assert_eq!(stats.max_depth, 4);
	assert_eq!(stats.kinds["String"], 3);
	assert_eq!(stats.kinds["Optional"], 2);
	assert_eq!(stats.kinds["UInt8"], 1);
	assert_eq!(stats.unknown.len(), 1);
	assert_eq!(stats.unknown["InclusiveRange"], 1);
}

#[test]
fn tags_without_value_are_counted() {
	let stats = scan_kinds(&json!({"type": "Array", "value": [{"type": "Void"}, {"type": "Optional"}]}));
	assert_eq!(stats.tagged_nodes, 3);
	assert_eq!(stats.max_depth, 2);
	assert_eq!(stats.kinds["Void"], 1);
	assert_eq!(stats.kinds["Optional"], 1);
	assert!(stats.unknown.is_empty());
}
