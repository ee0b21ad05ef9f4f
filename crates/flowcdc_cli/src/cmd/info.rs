use std::path::PathBuf;

use flowcdc::cdc::{CdcDocument, KindStats, Result, scan_kinds};
use serde::Serialize;

use crate::cmd::util::print_json;

#[derive(clap::Args)]
pub struct Args {
	/// Input document, or `-` for stdin.
	pub path: PathBuf,
	/// Emit a JSON report.
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct InfoReport<'a> {
	path: String,
	compression: &'static str,
	bytes: usize,
	#[serde(flatten)]
	stats: &'a KindStats,
}

/// Print document-level compression and tag statistics.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let doc = CdcDocument::open(&path)?;
	let stats = scan_kinds(&doc.value);

	if json {
		let report = InfoReport {
			path: path.display().to_string(),
			compression: doc.compression.as_str(),
			bytes: doc.byte_len,
			stats: &stats,
		};
		return print_json(&report, false);
	}

	println!("path: {}", path.display());
	println!("compression: {}", doc.compression.as_str());
	println!("bytes: {}", doc.byte_len);
	println!("top_kind: {}", stats.top_kind.as_deref().unwrap_or("-"));
	println!("tagged_nodes: {}", stats.tagged_nodes);
	println!("max_depth: {}", stats.max_depth);

	println!("kinds:");
	for (tag, count) in stats.ranked().into_iter().take(24) {
		println!("  {tag}: {count}");
	}

	if !stats.unknown.is_empty() {
		println!("unknown:");
		for (tag, count) in &stats.unknown {
			println!("  {tag}: {count}");
		}
	}

	Ok(())
}
