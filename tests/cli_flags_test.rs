//! CLI flag contract tests
//!
//! Verifies that analyze flags (--answer-column, --id-column, --hi, --lo,
//! --fail-on, --config, --output) and config defaults behave as documented.

use std::path::Path;
use std::process::Command;

fn ai_detect_bin() -> String {
    env!("CARGO_BIN_EXE_ai-detect").to_string()
}

/// A form export with non-default column names
fn setup_form_export() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let repetitive = vec!["comprehensive"; 90].join(" ");
    std::fs::write(
        dir.path().join("form.csv"),
        format!(
            "Timestamp,Email Address,What did you learn?\n\
             2024/03/01 09:00,a@example.com,The quick brown fox jumps over the lazy dog.\n\
             2024/03/01 09:05,b@example.com,{repetitive}\n\
             2024/03/01 09:10,c@example.com,text with — dash\n"
        ),
    )
    .unwrap();
    dir
}

fn run(dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(ai_detect_bin())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run ai-detect");
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

fn analyze_json(dir: &Path, extra: &[&str]) -> serde_json::Value {
    let mut args = vec!["analyze", "form.csv", "--format", "json"];
    args.extend(extra);
    let (code, stdout, stderr) = run(dir, &args);
    assert_eq!(code, 0, "stderr: {}", stderr);
    serde_json::from_str(&stdout).expect("valid JSON report")
}

#[test]
fn test_missing_answer_column_fails_with_message() {
    let dir = setup_form_export();
    let (code, _, stderr) = run(dir.path(), &["analyze", "form.csv"]);
    assert_ne!(code, 0);
    assert!(
        stderr.contains("Column 'answer' not found in input data"),
        "stderr: {}",
        stderr
    );
    assert!(stderr.contains("What did you learn?"));
}

#[test]
fn test_answer_and_id_column_flags() {
    let dir = setup_form_export();
    let report = analyze_json(
        dir.path(),
        &[
            "--answer-column",
            "What did you learn?",
            "--id-column",
            "Email Address",
        ],
    );
    assert_eq!(report["id_column"], "Email Address");
    assert_eq!(report["responses"][0]["id"], "a@example.com");
    assert_eq!(report["summary"]["total"], 3);
}

#[test]
fn test_config_file_sets_columns_and_thresholds() {
    let dir = setup_form_export();
    std::fs::write(
        dir.path().join("ai-detect.toml"),
        "[columns]\nanswer = \"What did you learn?\"\nid = \"Email Address\"\n\n[thresholds]\nhi = 0.45\nlo = 0.40\n",
    )
    .unwrap();
    let report = analyze_json(dir.path(), &[]);
    assert_eq!(report["thresholds"]["hi"], 0.45);
    // The em-dash answer (0.459) is Likely AI once hi drops to 0.45
    assert_eq!(report["responses"][2]["flag"], "Likely AI");
}

#[test]
fn test_cli_thresholds_override_config() {
    let dir = setup_form_export();
    std::fs::write(
        dir.path().join("ai-detect.toml"),
        "[columns]\nanswer = \"What did you learn?\"\n\n[thresholds]\nhi = 0.45\n",
    )
    .unwrap();
    let report = analyze_json(dir.path(), &["--hi", "0.9", "--lo", "0.1"]);
    assert_eq!(report["summary"]["ambiguous"], 3);
}

#[test]
fn test_explicit_config_path() {
    let dir = setup_form_export();
    std::fs::write(
        dir.path().join("custom.json"),
        r#"{"columns": {"answer": "What did you learn?", "id": ""}}"#,
    )
    .unwrap();
    let report = analyze_json(dir.path(), &["--config", "custom.json"]);
    assert!(report["id_column"].is_null());
    assert_eq!(report["summary"]["total"], 3);
}

#[test]
fn test_fail_on_likely_ai_exits_1() {
    let dir = setup_form_export();
    let (code, _, stderr) = run(
        dir.path(),
        &[
            "analyze",
            "form.csv",
            "--answer-column",
            "What did you learn?",
            "--fail-on",
            "likely-ai",
        ],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("--fail-on=likely-ai"));
}

#[test]
fn test_fail_on_not_tripped_exits_0() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("form.csv"),
        "answer\nThe quick brown fox jumps over the lazy dog.\n",
    )
    .unwrap();
    let (code, _, stderr) = run(
        dir.path(),
        &["analyze", "form.csv", "--fail-on", "ambiguous"],
    );
    assert_eq!(code, 0, "stderr: {}", stderr);
}

#[test]
fn test_fail_on_from_config() {
    let dir = setup_form_export();
    std::fs::write(
        dir.path().join("ai-detect.toml"),
        "[columns]\nanswer = \"What did you learn?\"\n\n[defaults]\nfail_on = \"ambiguous\"\n",
    )
    .unwrap();
    let (code, _, _) = run(dir.path(), &["analyze", "form.csv", "--format", "json"]);
    assert_eq!(code, 1);
}

#[test]
fn test_no_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run(dir.path(), &["analyze"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("No input CSV given"));
}

#[test]
fn test_missing_sample_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run(dir.path(), &["analyze", "--sample"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Sample CSV not found"));
}

#[test]
fn test_unterminated_quote_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("form.csv"), "answer\n\"never closed\n").unwrap();
    let (code, _, stderr) = run(dir.path(), &["analyze", "form.csv"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Failed to parse input CSV"));
}

#[test]
fn test_invalid_format_rejected() {
    let dir = setup_form_export();
    let (code, _, _) = run(dir.path(), &["analyze", "form.csv", "--format", "xlsx"]);
    assert_ne!(code, 0);
}

#[test]
fn test_out_of_range_threshold_rejected() {
    let dir = setup_form_export();
    let (code, _, stderr) = run(dir.path(), &["analyze", "form.csv", "--hi", "1.5"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("between 0 and 1"));
}
