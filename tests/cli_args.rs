//! Integration tests for CLI argument handling
//!
//! Runs the compiled binary against offline subcommands and checks output
//! and exit codes.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_cropdoc"))
        .args(args)
        .output()
        .expect("Failed to execute cropdoc")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cropdoc"), "Help should mention cropdoc");
    assert!(
        stdout.contains("recommend"),
        "Help should list the recommend subcommand"
    );
}

#[test]
fn test_recommend_known_disease_prints_ranked_options() {
    let output = run_cli(&["recommend", "anthracnose", "--severity", "moderate"]);
    assert!(output.status.success(), "Expected recommend to succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("anthracnose"));
    // Mancozeb outranks the copper option on effectiveness at moderate severity
    let mancozeb = stdout.find("Mancozeb").expect("Mancozeb should be listed");
    let copper = stdout.find("Copper").expect("Copper should be listed");
    assert!(mancozeb < copper, "Mancozeb should rank above Copper");
}

#[test]
fn test_recommend_organic_excludes_chemicals() {
    let output = run_cli(&["recommend", "anthracnose", "--severity", "mild", "--organic"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Neem"));
    assert!(!stdout.contains("[chemical]"));
}

#[test]
fn test_recommend_max_results_limits_output() {
    let output = run_cli(&["recommend", "anthracnose", "--max-results", "1"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("  1. "));
    assert!(!stdout.contains("  2. "), "Only one option should be printed");
}

#[test]
fn test_recommend_healthy_reports_no_treatment_needed() {
    let output = run_cli(&["recommend", "healthy"]);
    assert!(
        output.status.success(),
        "A healthy plant is an answer, not an error"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("no treatment needed"));
}

#[test]
fn test_recommend_unknown_disease_fails() {
    let output = run_cli(&["recommend", "black_sigatoka"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown disease"), "stderr: {}", stderr);
}

#[test]
fn test_recommend_invalid_severity_fails() {
    let output = run_cli(&["recommend", "anthracnose", "--severity", "apocalyptic"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid severity"),
        "Should print error message about invalid severity: {}",
        stderr
    );
}

#[test]
fn test_diseases_lists_catalog() {
    let output = run_cli(&["diseases"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("anthracnose"));
    assert!(stdout.contains("fall_armyworm"));
    assert!(stdout.contains("healthy"));
}

#[test]
fn test_diseases_filtered_by_crop() {
    let output = run_cli(&["diseases", "--crop", "maize"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("fall_armyworm"));
    assert!(!stdout.contains("anthracnose"));
}

#[test]
fn test_diseases_invalid_crop_fails() {
    let output = run_cli(&["diseases", "--crop", "banana"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid crop"), "stderr: {}", stderr);
}

#[test]
fn test_info_shows_symptoms_and_treatments() {
    let output = run_cli(&["info", "mosaic"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Symptoms:"));
    assert!(stdout.contains("Prevention:"));
    assert!(stdout.contains("Whitefly control"));
}

#[test]
fn test_prices_are_offline_and_deterministic() {
    let first = run_cli(&["prices", "mancozeb", "--location", "Accra"]);
    let second = run_cli(&["prices", "mancozeb", "--location", "Accra"]);
    assert!(first.status.success());
    assert!(second.status.success());

    let first_out = String::from_utf8_lossy(&first.stdout);
    let second_out = String::from_utf8_lossy(&second.stdout);
    assert!(first_out.contains("GHS"));
    assert!(first_out.contains("average GHS"));

    // Ignore the timestamp-free quote lines being equal across runs
    let prices_of = |s: &str| -> Vec<String> {
        s.lines()
            .filter(|l| l.trim_start().starts_with("GHS"))
            .map(|l| l.to_string())
            .collect()
    };
    assert_eq!(prices_of(&first_out), prices_of(&second_out));
}
