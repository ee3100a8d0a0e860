//! End-to-end tests for `tapiz config` commands.

use std::fs;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

// ============================================================================
// Show / Path
// ============================================================================

#[test]
fn test_config_show_defaults_json() {
    let result = json_of(&run_isolated(&["config", "show", "--json"]));

    assert!(result["path"].as_str().unwrap().ends_with("config.toml"));
    assert_eq!(result["ui"]["theme"], "auto");
    assert_eq!(result["ui"]["show_help_on_startup"], true);
    assert_eq!(result["messaging"]["host"], "wa.me");
    assert!(result["messaging"]["recipient"].is_string());
    assert!(result["share"]["link"].is_string());
}

#[test]
fn test_config_show_human_readable() {
    let output = run_isolated(&["config", "show"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("[messaging]"));
    assert!(stdout.contains("wa.me"));
}

#[test]
fn test_config_path_honors_override() {
    let temp = TempDir::new().unwrap();
    let output = isolated_command(&["config", "path"], temp.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let path = stdout_of(&output);
    assert!(path.trim().starts_with(temp.path().to_str().unwrap()));
}

// ============================================================================
// Setters
// ============================================================================

#[test]
fn test_set_recipient_persists() {
    let temp = TempDir::new().unwrap();

    let output = isolated_command(&["config", "set-recipient", "15550001111"], temp.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let contents = fs::read_to_string(temp.path().join("config.toml")).unwrap();
    assert!(contents.contains("15550001111"));

    let shown = json_of(
        &isolated_command(&["config", "show", "--json"], temp.path())
            .output()
            .unwrap(),
    );
    assert_eq!(shown["messaging"]["recipient"], "15550001111");
}

#[test]
fn test_set_recipient_rejects_path_characters() {
    let temp = TempDir::new().unwrap();

    let output = isolated_command(&["config", "set-recipient", "123/evil"], temp.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(!temp.path().join("config.toml").exists());
}

#[test]
fn test_set_link_and_theme() {
    let temp = TempDir::new().unwrap();

    for args in [
        ["config", "set-link", "https://example.com/mi-tapiz"],
        ["config", "set-theme", "dark"],
    ] {
        let output = isolated_command(&args, temp.path()).output().unwrap();
        assert_eq!(output.status.code(), Some(0));
    }

    let shown = json_of(
        &isolated_command(&["config", "show", "--json"], temp.path())
            .output()
            .unwrap(),
    );
    assert_eq!(shown["share"]["link"], "https://example.com/mi-tapiz");
    assert_eq!(shown["ui"]["theme"], "dark");

    // The share message picks the link up
    let message = isolated_command(&["message", "share"], temp.path())
        .output()
        .unwrap();
    assert!(stdout_of(&message).contains("https://example.com/mi-tapiz"));
}

#[test]
fn test_set_theme_rejects_unknown_mode() {
    let output = run_isolated(&["config", "set-theme", "sepia"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_malformed_config_file_fails_show() {
    let temp = config_dir_with("this is = = not toml");

    let output = isolated_command(&["config", "show"], temp.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load configuration"));
}
