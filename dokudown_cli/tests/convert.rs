mod common;

use clap::Parser;
use dokudown_cli::DokudownCli;
use dokudown_core::AnyEmptyResult;
use dokudown_core::OutputTarget;
use similar_asserts::assert_eq;

const SAMPLE: &str = "# Title\n\n1. one\n2. two\n```\ncode here\n```\n";
const SAMPLE_OUTPUT: &str = "===== Title =====\n  - one\n  - two<code>\ncode here\n</code>\n";

#[test]
fn converts_to_stdout() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("readme.md"), SAMPLE)?;

	common::dokudown_cmd()
		.current_dir(tmp.path())
		.arg("readme.md")
		.assert()
		.success()
		.stdout(SAMPLE_OUTPUT);

	Ok(())
}

#[test]
fn converts_to_output_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("readme.md"), SAMPLE)?;

	common::dokudown_cmd()
		.current_dir(tmp.path())
		.arg("readme.md")
		.arg("--output_file")
		.arg("readme.txt")
		.assert()
		.success()
		.stdout("");

	assert_eq!(
		std::fs::read_to_string(tmp.path().join("readme.txt"))?,
		SAMPLE_OUTPUT
	);

	Ok(())
}

#[test]
fn short_output_flag_is_accepted() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("notes.md"), "## Notes\n")?;

	common::dokudown_cmd()
		.current_dir(tmp.path())
		.args(["notes.md", "-o", "notes.txt"])
		.assert()
		.success();

	assert_eq!(
		std::fs::read_to_string(tmp.path().join("notes.txt"))?,
		"==== Notes ====\n"
	);

	Ok(())
}

#[test]
fn missing_input_fails_without_output() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::dokudown_cmd()
		.current_dir(tmp.path())
		.args(["missing.md", "-o", "out.txt"])
		.assert()
		.failure()
		.stdout("")
		.stderr(predicates::str::contains("failed to read markdown"));

	assert!(!tmp.path().join("out.txt").exists());

	Ok(())
}

#[test]
fn invalid_utf8_input_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("bad.md"), b"# ok\n\xff\xfe\n")?;

	common::dokudown_cmd()
		.current_dir(tmp.path())
		.arg("bad.md")
		.assert()
		.failure()
		.stdout("")
		.stderr(predicates::str::contains("failed to read markdown"));

	Ok(())
}

#[test]
fn missing_argument_is_rejected() {
	common::dokudown_cmd().assert().failure();
}

#[test]
fn config_closes_unterminated_code() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("code.md"), "```rust\nfn main() {}\n")?;

	common::dokudown_cmd()
		.current_dir(tmp.path())
		.arg("code.md")
		.assert()
		.success()
		.stdout("<code rust>\nfn main() {}\n");

	std::fs::write(
		tmp.path().join("dokudown.toml"),
		"[code]\nclose_unterminated = true\n",
	)?;

	common::dokudown_cmd()
		.current_dir(tmp.path())
		.arg("code.md")
		.assert()
		.success()
		.stdout("<code rust>\nfn main() {}\n</code>\n");

	Ok(())
}

#[test]
fn invalid_config_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("in.md"), "# T\n")?;
	std::fs::write(tmp.path().join("dokudown.toml"), "[code\n")?;

	common::dokudown_cmd()
		.current_dir(tmp.path())
		.arg("in.md")
		.assert()
		.failure()
		.stderr(predicates::str::contains("failed to parse config file"));

	Ok(())
}

#[test]
fn debug_logging_goes_to_stderr() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("list.md"), "1. a\n   1. b\n")?;

	common::dokudown_cmd()
		.current_dir(tmp.path())
		.env("RUST_LOG", "debug")
		.arg("list.md")
		.assert()
		.success()
		.stdout("  - a\n    - b\n")
		.stderr(predicates::str::contains("list depth changed"));

	Ok(())
}

#[test]
fn parses_arguments() {
	let cli = DokudownCli::parse_from(["dokudown", "in.md", "--output_file", "out.txt"]);
	assert_eq!(cli.input_file, std::path::PathBuf::from("in.md"));
	assert_eq!(
		cli.output_target(),
		OutputTarget::File("out.txt".into())
	);

	let cli = DokudownCli::parse_from(["dokudown", "in.md"]);
	assert_eq!(cli.output_target(), OutputTarget::Stdout);
}
