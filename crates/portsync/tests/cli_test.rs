//! Integration tests for the `portsync` CLI binary.
//!
//! These tests validate argument parsing, help output, shell completions,
//! and error handling — all without a monitoring system or device.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `portsync` binary with env isolation.
///
/// Clears all `PORTSYNC_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn portsync_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("portsync");
    cmd.env("HOME", "/tmp/portsync-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/portsync-test-nonexistent")
        .env_remove("PORTSYNC_PROFILE")
        .env_remove("PORTSYNC_HOST")
        .env_remove("PORTSYNC_TOKEN")
        .env_remove("PORTSYNC_OUTPUT")
        .env_remove("PORTSYNC_INSECURE")
        .env_remove("PORTSYNC_TIMEOUT")
        .env_remove("PORTSYNC_NETCONF_PASSWORD");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = portsync_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    portsync_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("Sync port descriptions")
            .and(predicate::str::contains("sync"))
            .and(predicate::str::contains("ports"))
            .and(predicate::str::contains("interfaces")),
    );
}

#[test]
fn test_version_flag() {
    portsync_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("portsync"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    portsync_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    portsync_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_fish() {
    portsync_cmd()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = portsync_cmd().arg("frobnicate").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("frobnicate"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_sync_without_config_fails() {
    portsync_cmd()
        .args(["sync", "42"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("config")
                .or(predicate::str::contains("Configuration"))
                .or(predicate::str::contains("host")),
        );
}

#[test]
fn test_sync_requires_device_id() {
    let output = portsync_cmd().arg("sync").output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected usage exit code");
}

#[test]
fn test_sync_rejects_non_numeric_device_id() {
    let output = portsync_cmd().args(["sync", "not-a-number"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected usage exit code");
}

#[test]
fn test_config_show_no_config() {
    // `config show` uses load_config_or_default() so it succeeds even
    // when no config file exists — it just renders the default config.
    portsync_cmd().args(["config", "show"]).assert().success();
}

#[test]
fn test_invalid_output_format() {
    let output = portsync_cmd()
        .args(["--output", "invalid", "ports", "1"])
        .output()
        .unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid output format"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid")
            || text.contains("possible values")
            || text.contains("valid value"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_global_flags_parsing() {
    // All flags should parse — the failure should be about missing
    // configuration, not about argument parsing.
    portsync_cmd()
        .args([
            "--output",
            "json",
            "--verbose",
            "--insecure",
            "--timeout",
            "60",
            "ports",
            "7",
        ])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("config")
                .or(predicate::str::contains("Configuration"))
                .or(predicate::str::contains("host")),
        );
}

// ── Config file loading ─────────────────────────────────────────────

#[test]
fn test_profiles_reads_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_dir = dir.path().join("portsync");
    std::fs::create_dir_all(&cfg_dir).unwrap();
    std::fs::write(
        cfg_dir.join("config.toml"),
        "default_profile = \"lab\"\n\n[profiles.lab]\nhost = \"https://lnms.example.net\"\n",
    )
    .unwrap();

    portsync_cmd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "profiles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lab *"));
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_sync_help_shows_dry_run() {
    portsync_cmd()
        .args(["sync", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--dry-run").and(predicate::str::contains("DEVICE_ID")),
        );
}

#[test]
fn test_config_subcommands_exist() {
    portsync_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("profiles"))
                .and(predicate::str::contains("set-token"))
                .and(predicate::str::contains("set-password")),
        );
}
