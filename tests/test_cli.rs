//! Tests for the `hookgen` binary
//!
//! These run the built executable and check what lands on stdout, stderr
//! and in the exit status.

use std::process::{Command, Output};

use pretty_assertions::assert_eq;

const ADD_ENGINE_PART: &str = "il2cpp:000000018077F4B0; void __stdcall Quests_QuestController__AddEnginePart(int32_t id, int32_t count, const MethodInfo* method)";

fn hookgen(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_hookgen"))
		.args(args)
		.env_remove("RUST_LOG")
		.env_remove("HOOKGEN_DEBUG")
		.output()
		.expect("failed to run hookgen")
}

#[test]
fn no_arguments_prints_usage() {
	let output = hookgen(&[]);
	assert!(output.status.success());
	let stdout = String::from_utf8(output.stdout).unwrap();
	let lines: Vec<_> = stdout.lines().collect();
	assert_eq!(lines.len(), 2);
	assert!(lines[0].starts_with("Usage: hookgen"));
	assert!(lines[1].starts_with("Example: "));
}

#[test]
fn signature_is_rendered_to_stdout() {
	let output = hookgen(&[ADD_ENGINE_PART]);
	assert!(output.status.success());
	assert_eq!(
		String::from_utf8(output.stdout).unwrap(),
		hookgen::generate(ADD_ENGINE_PART).unwrap()
	);
	assert!(output.stderr.is_empty());
}

#[test]
fn verbose_logs_stay_off_stdout() {
	let output = hookgen(&["-v", ADD_ENGINE_PART]);
	assert!(output.status.success());
	assert_eq!(
		String::from_utf8(output.stdout).unwrap(),
		hookgen::generate(ADD_ENGINE_PART).unwrap()
	);
	assert!(!output.stderr.is_empty());
}

#[test]
fn options_are_applied() {
	let output = hookgen(&[
		"--image-base",
		"0x140000000",
		"--log-macro",
		"TRACE_HOOK",
		"--erase-opaque-types",
		"game:0000000140000010; int __fastcall Foo__Bar(Foo_o* this, int a)",
	]);
	assert!(output.status.success());
	let stdout = String::from_utf8(output.stdout).unwrap();
	assert!(stdout.contains("| Offset: 0x0000000000000010\n"));
	assert!(stdout.contains("\tTRACE_HOOK(\"Foo::Bar called\")\n"));
	assert!(stdout.contains("(__fastcall* _type_Foo__Bar)(void* this, int a);\n"));
}

#[test]
fn malformed_signature_fails_without_output() {
	let output = hookgen(&["il2cpp:000000018077F4B0 void __stdcall Foo(int a)"]);
	assert!(!output.status.success());
	assert!(output.stdout.is_empty());
	let stderr = String::from_utf8(output.stderr).unwrap();
	assert!(stderr.starts_with("error[malformed_signature]: missing `;`"), "{stderr}");
	assert_eq!(stderr.lines().count(), 1);
}

#[test]
fn failing_batch_writes_nothing() {
	let output = hookgen(&[ADD_ENGINE_PART, "il2cpp:nothex; void __stdcall Foo(int a)"]);
	assert!(!output.status.success());
	assert!(output.stdout.is_empty());
	let stderr = String::from_utf8(output.stderr).unwrap();
	assert!(stderr.starts_with("error[invalid_address]"), "{stderr}");
}

#[test]
fn batch_renders_every_signature() {
	let second = "il2cpp:0000000180000100; float __stdcall Car__GetSpeed(Car_o* this, const MethodInfo* method)";
	let output = hookgen(&[ADD_ENGINE_PART, second]);
	assert!(output.status.success());
	let expected = format!(
		"{}\n{}",
		hookgen::generate(ADD_ENGINE_PART).unwrap(),
		hookgen::generate(second).unwrap()
	);
	assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
}
