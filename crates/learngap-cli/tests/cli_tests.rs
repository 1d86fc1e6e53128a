//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn learngap() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("learngap").unwrap()
}

fn write_input(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("input.json");
    std::fs::write(&path, json).unwrap();
    path
}

#[test]
fn analyze_prints_text_summary() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        r#"{"studentQuizAnswers": ["kinesthetic", "kinesthetic", "visual"], "diagnosedDifficulty": true}"#,
    );

    learngap()
        .arg("analyze")
        .arg("--input")
        .arg(&input)
        .arg("--student")
        .arg("Noah")
        .assert()
        .success()
        .stdout(predicate::str::contains("Assessment for Noah"))
        .stdout(predicate::str::contains("Primary style: Kinesthetic"))
        .stdout(predicate::str::contains("Risk level: Low"))
        .stdout(predicate::str::contains("Previously diagnosed learning difficulty"));
}

#[test]
fn analyze_rejects_input_without_sources() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, r#"{"uploadedText": "notes only"}"#);

    learngap()
        .arg("analyze")
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: At least one data source is required",
        ));
}

#[test]
fn analyze_reports_bad_json() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "{ nope");

    learngap()
        .arg("analyze")
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse assessment input"));
}

#[test]
fn analyze_json_then_render_report() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        r#"{"teacherResponses": {"q1": 1, "q2": 2}, "parentResponses": {"q1": 2}}"#,
    );
    let report_path = dir.path().join("out").join("report.json");

    learngap()
        .arg("analyze")
        .arg("--input")
        .arg(&input)
        .arg("--format")
        .arg("json")
        .arg("--output")
        .arg(&report_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Report saved to"));

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(saved["result"]["riskAssessment"]["level"], "High");

    learngap()
        .arg("report")
        .arg("--input")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("## Identified gaps"))
        .stdout(predicate::str::contains("Attention & Focus"));

    let html_path = dir.path().join("report.html");
    learngap()
        .arg("report")
        .arg("--input")
        .arg(&report_path)
        .arg("--format")
        .arg("html")
        .arg("--output")
        .arg(&html_path)
        .assert()
        .success();
    let html = std::fs::read_to_string(&html_path).unwrap();
    assert!(html.contains("<svg"));
}

#[test]
fn analyze_writes_html_into_new_directory() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, r#"{"studentQuizAnswers": ["reading"]}"#);
    let html_path = dir.path().join("reports").join("ava.html");

    learngap()
        .arg("analyze")
        .arg("--input")
        .arg(&input)
        .arg("--student")
        .arg("Ava")
        .arg("--format")
        .arg("html")
        .arg("--output")
        .arg(&html_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Written to:"));

    let html = std::fs::read_to_string(&html_path).unwrap();
    assert!(html.contains("Learning assessment: Ava"));
}

#[test]
fn convert_text_to_audio() {
    learngap()
        .arg("convert")
        .arg("--format")
        .arg("audio")
        .arg("--text")
        .arg("Read slowly.")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[BEGIN SCRIPT]"))
        .stdout(predicate::str::contains("Read slowly.\n\n[PAUSE 1 SECOND]"));
}

#[test]
fn convert_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lesson.txt");
    std::fs::write(&path, "Cells divide. Cells grow.").unwrap();

    learngap()
        .arg("convert")
        .arg("--format")
        .arg("simplified")
        .arg("--input")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("• Cells divide\n\n• Cells grow"));
}

#[test]
fn convert_unknown_format_prints_text_unchanged() {
    learngap()
        .arg("convert")
        .arg("--format")
        .arg("braille")
        .arg("--text")
        .arg("Hello. World")
        .assert()
        .success()
        .stdout("Hello. World\n");
}

#[test]
fn convert_rejects_empty_text() {
    learngap()
        .arg("convert")
        .arg("--format")
        .arg("audio")
        .arg("--text")
        .arg("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Text is required"));
}

#[test]
fn convert_requires_some_text() {
    learngap()
        .arg("convert")
        .arg("--format")
        .arg("visual")
        .assert()
        .failure();
}

#[test]
fn questions_for_one_audience() {
    learngap()
        .arg("questions")
        .arg("--audience")
        .arg("parent")
        .assert()
        .success()
        .stdout(predicate::str::contains("Parent Questionnaire (8 questions)"))
        .stdout(predicate::str::contains("q8."))
        .stdout(predicate::str::contains("Learning Style Quiz").not());
}

#[test]
fn questions_unknown_audience() {
    learngap()
        .arg("questions")
        .arg("--audience")
        .arg("principal")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown audience: principal"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    learngap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created learngap.toml"))
        .stdout(predicate::str::contains("Created sample-input.json"));

    assert!(dir.path().join("learngap.toml").exists());

    learngap()
        .current_dir(dir.path())
        .arg("analyze")
        .arg("--input")
        .arg("sample-input.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("Primary style: Kinesthetic"))
        .stdout(predicate::str::contains("Reading Comprehension"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    learngap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    learngap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
