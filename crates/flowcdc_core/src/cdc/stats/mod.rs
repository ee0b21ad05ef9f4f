use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::cdc::Kind;
use crate::cdc::decode::tagged_parts;

/// Tag counts gathered from a tagged tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KindStats {
	/// Tag of the root node, if the root is tagged.
	pub top_kind: Option<String>,
	/// Number of tagged nodes visited.
	pub tagged_nodes: u64,
	/// Deepest tagged nesting level; the root counts as 1.
	pub max_depth: u32,
	/// Occurrences per `type` tag.
	pub kinds: BTreeMap<String, u64>,
	/// Occurrences of tags the decoder passes through as unknown.
	pub unknown: BTreeMap<String, u64>,
}

impl KindStats {
	/// Tags sorted by descending count, then name.
	pub fn ranked(&self) -> Vec<(&str, u64)> {
		let mut entries: Vec<_> = self.kinds.iter().map(|(tag, count)| (tag.as_str(), *count)).collect();
		entries.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.cmp(right.0)));
		entries
	}
}

/// Walk a JSON-CDC tree and count the tags the decoder would visit.
///
/// Unknown kinds are counted but not descended into, matching decode.
pub fn scan_kinds(value: &Value) -> KindStats {
	let mut stats = KindStats {
		top_kind: value
			.as_object()
			.and_then(tagged_parts)
			.map(|(tag, _)| tag.to_owned()),
		..KindStats::default()
	};
	walk(value, 0, &mut stats);
	stats
}

fn walk(value: &Value, depth: u32, stats: &mut KindStats) {
	match value {
		Value::Array(items) => {
			for item in items {
				walk(item, depth, stats);
			}
		}
		Value::Object(map) => {
			let Some((tag, payload)) = tagged_parts(map) else {
				return;
			};
			let depth = depth + 1;
			stats.tagged_nodes += 1;
			stats.max_depth = stats.max_depth.max(depth);
			*stats.kinds.entry(tag.to_owned()).or_insert(0) += 1;

			let kind = Kind::parse(tag);
			match kind {
				Kind::Optional | Kind::Array => walk(payload, depth, stats),
				Kind::Dictionary => {
					for entry in payload.as_array().into_iter().flatten() {
						if let Some(key) = entry.get("key") {
							walk(key, depth, stats);
						}
						if let Some(value) = entry.get("value") {
							walk(value, depth, stats);
						}
					}
				}
				_ if kind.is_composite() || kind.is_extended_composite() => {
					let fields = match payload {
						Value::Object(inner) => inner.get("fields").and_then(Value::as_array),
						Value::Array(fields) => Some(fields),
						_ => None,
					};
					for field in fields.into_iter().flatten() {
						if let Some(value) = field.get("value") {
							walk(value, depth, stats);
						}
					}
				}
				Kind::Unknown => {
					*stats.unknown.entry(tag.to_owned()).or_insert(0) += 1;
				}
				_ => {}
			}
		}
		_ => {}
	}
}

#[cfg(test)]
mod tests;
