use assert_cmd::Command;

pub fn dokudown_cmd() -> Command {
	let mut cmd = Command::cargo_bin("dokudown").unwrap_or_else(|e| panic!("binary: {e}"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("RUST_LOG");
	cmd
}
