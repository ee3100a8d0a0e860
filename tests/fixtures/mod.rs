//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the tapiz binary
pub fn tapiz_bin() -> &'static str {
    env!("CARGO_BIN_EXE_tapiz")
}

/// Creates a Command whose config directory is `config_dir`.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(tapiz_bin());
    cmd.env("TAPIZ_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs `args` against a fresh, empty config directory.
pub fn run_isolated(args: &[&str]) -> Output {
    let temp = TempDir::new().expect("Failed to create temp dir");
    isolated_command(args, temp.path())
        .output()
        .expect("Failed to execute command")
}

/// Writes `contents` as the config file inside a new temp config dir.
pub fn config_dir_with(contents: &str) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp.path().join("config.toml"), contents).expect("Failed to write config");
    temp
}

/// Stdout as a string.
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Parses stdout as JSON, failing the test with stderr on error.
pub fn json_of(output: &Output) -> serde_json::Value {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_str(&stdout_of(output)).expect("Should parse JSON output")
}
