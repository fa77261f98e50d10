#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for the carehome-server binary.

use std::process::{Command, Stdio};

fn run_carehome_server(args: &[&str], envs: &[(&str, &str)]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_carehome-server"))
        .args(args)
        .envs(envs.iter().copied())
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute carehome-server")
}

#[test]
fn help_lists_subcommands_and_options() {
    let output = run_carehome_server(&["--help"], &[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("run"));
    assert!(stdout.contains("check"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--print-config"));
}

#[test]
fn missing_config_file_is_rejected() {
    let output = run_carehome_server(&["--config", "/nonexistent/carehome.yaml", "check"], &[]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config file does not exist"));
}

#[test]
fn print_config_hides_secrets() {
    let output = run_carehome_server(
        &["--print-config", "--port", "4100"],
        &[
            ("DB_DEV_SERVER", "db.internal"),
            ("DB_DEV_PASSWORD", "hunter2"),
        ],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("4100"));
    assert!(stdout.contains("db.internal"));
    assert!(!stdout.contains("hunter2"));
}

#[test]
fn check_in_build_phase_skips_the_database() {
    let output = run_carehome_server(&["check"], &[("CAREHOME_BUILD_PHASE", "true")]);
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Configuration is valid"));
}
