//! CLI Integration Tests for Linkboard
//!
//! Runs the built `linkboard-server` binary for the init and config commands.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_linkboard(args: &[&str], working_dir: Option<&std::path::Path>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_linkboard-server"));
    cmd.args(args).env_remove("LINKBOARD_PORT").env_remove("LINKBOARD_HOST");

    if let Some(dir) = working_dir {
        cmd.current_dir(dir);
    }

    cmd.output().expect("Failed to execute command")
}

#[test]
fn test_help_command() {
    let output = run_linkboard(&["--help"], None);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Linkboard"));
    assert!(stdout.contains("init"));
    assert!(stdout.contains("config"));
    assert!(stdout.contains("serve"));
}

#[test]
fn test_version_command() {
    let output = run_linkboard(&["--version"], None);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("linkboard-server"));
}

#[test]
fn test_init_scaffolds_project() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path().to_str().unwrap();

    let output = run_linkboard(&["--no-color", "init", temp_path, "--port", "9001"], None);
    assert!(
        output.status.success(),
        "init failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let toml = fs::read_to_string(temp_dir.path().join("linkboard.toml")).unwrap();
    assert!(toml.contains("port = 9001"));
    assert!(temp_dir.path().join(".env.example").exists());
    assert!(temp_dir.path().join("config").is_dir());
    assert!(temp_dir.path().join("data").is_dir());
}

#[test]
fn test_init_twice_keeps_existing_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path().to_str().unwrap();

    assert!(run_linkboard(&["init", temp_path, "--port", "9001"], None)
        .status
        .success());
    let output = run_linkboard(&["--no-color", "init", temp_path, "--port", "9002"], None);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("already exists"));
    let toml = fs::read_to_string(temp_dir.path().join("linkboard.toml")).unwrap();
    assert!(toml.contains("port = 9001"));
}

#[test]
fn test_config_validate_after_init() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path().to_str().unwrap();
    assert!(run_linkboard(&["init", temp_path], None).status.success());

    let output = run_linkboard(&["--no-color", "config", "--validate"], Some(temp_dir.path()));

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Configuration is valid"));
}

#[test]
fn test_config_rejects_invalid_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(
        temp_dir.path().join("linkboard.toml"),
        "[server]\nlog_format = \"xml\"\n",
    )
    .unwrap();

    let output = run_linkboard(&["--no-color", "config"], Some(temp_dir.path()));

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("log_format"));
}

#[test]
fn test_config_shows_defaults_without_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_linkboard(&["--no-color", "config"], Some(temp_dir.path()));

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("127.0.0.1:8000"));
    assert!(stdout.contains("https://api.linkedin.com/v2"));
}
