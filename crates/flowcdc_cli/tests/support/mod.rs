#![allow(dead_code)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

pub fn fixture_arg(name: &str) -> String {
	flowcdc_testkit::fixture_path(name).to_string_lossy().into_owned()
}

pub fn run_flowcdc(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_flowcdc"))
		.args(args)
		.env_remove("RUST_LOG")
		.output()
		.expect("flowcdc command executes")
}

pub fn run_flowcdc_stdin(args: &[&str], input: &[u8]) -> Output {
	let mut child = Command::new(env!("CARGO_BIN_EXE_flowcdc"))
		.args(args)
		.env_remove("RUST_LOG")
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("flowcdc command spawns");
	child
		.stdin
		.take()
		.expect("stdin is piped")
		.write_all(input)
		.expect("stdin accepts input");
	child.wait_with_output().expect("flowcdc command completes")
}

pub fn stdout_json(output: &Output) -> serde_json::Value {
	assert_success(output);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

pub fn stdout_text(output: &Output) -> String {
	assert_success(output);
	String::from_utf8_lossy(&output.stdout).into_owned()
}

fn assert_success(output: &Output) {
	assert!(
		output.status.success(),
		"flowcdc command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
}
