//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. All commands
//! run with RESTWELL_ENV=dev so they never touch a real user config.

use std::process::Command;

/// Run a CLI command and return output.
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "restwell-cli", "--"])
        .args(args)
        .env("RESTWELL_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_bedtime_default_inputs() {
    let (stdout, _, code) = run_cli(&["bedtime"]);
    assert_eq!(code, 0, "bedtime failed");
    assert!(stdout.contains("Recommended bedtime:"));
}

#[test]
fn test_bedtime_json_report() {
    let (stdout, _, code) = run_cli(&[
        "bedtime", "--wake", "06:45", "--sleep", "9.5", "--coffee", "3", "--json",
    ]);
    assert_eq!(code, 0, "bedtime --json failed");
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON report");
    assert!(report["predicted_sleep_hours"].as_f64().unwrap() > 0.0);
    assert!(report["bedtime"]["time"]["hour"].is_u64());
}

#[test]
fn test_bedtime_boundary_inputs() {
    for (sleep, coffee) in [("4.0", "0"), ("12.0", "20")] {
        let (_, _, code) = run_cli(&["bedtime", "--sleep", sleep, "--coffee", coffee]);
        assert_eq!(code, 0, "boundary input {sleep}/{coffee} rejected");
    }
}

#[test]
fn test_bedtime_rejects_out_of_range_sleep() {
    let (_, stderr, code) = run_cli(&["bedtime", "--sleep", "13.0"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_bedtime_rejects_bad_wake_time() {
    let (_, _, code) = run_cli(&["bedtime", "--wake", "25:61"]);
    assert_ne!(code, 0);
}

#[test]
fn test_bedtime_missing_model_artifact() {
    let (_, stderr, code) = run_cli(&["bedtime", "--model", "/no/such/model.json"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_model_info() {
    let (stdout, _, code) = run_cli(&["model", "info"]);
    assert_eq!(code, 0, "model info failed");
    let info: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON info");
    assert_eq!(info["output_unit"], "hours");
}

#[test]
fn test_config_list() {
    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    assert!(stdout.contains("use_24h_clock"));
}

#[test]
fn test_config_get() {
    let (_, _, code) = run_cli(&["config", "get", "display.use_24h_clock"]);
    assert_eq!(code, 0, "config get failed");
}

#[test]
fn test_config_get_unknown_key() {
    let (_, _, code) = run_cli(&["config", "get", "no.such.key"]);
    assert_ne!(code, 0);
}
