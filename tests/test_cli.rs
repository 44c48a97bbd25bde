//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_preprocess_writes_clean_table() {
    let mut df = create_raw_dataframe();
    let (temp_dir, csv_path) = create_temp_csv(&mut df);
    let output = temp_dir.path().join("clean.csv");

    Command::cargo_bin("smescore")
        .unwrap()
        .args(["preprocess", "-i"])
        .arg(&csv_path)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("PIPELINE SUMMARY"));

    let clean = std::fs::read_to_string(&output).unwrap();
    let header = clean.lines().next().unwrap();
    assert!(header.contains("Years Since Incorporation"));
    assert!(!header.contains("Registered Number"));
    assert!(!header.contains("Working Capital"));
    // 2 surviving rows + header
    assert_eq!(clean.trim().lines().count(), 3);
}

#[test]
fn test_preprocess_default_output_path() {
    let mut df = create_raw_dataframe();
    let (temp_dir, csv_path) = create_temp_csv(&mut df);

    Command::cargo_bin("smescore")
        .unwrap()
        .args(["preprocess", "-i"])
        .arg(&csv_path)
        .assert()
        .success();

    assert!(temp_dir.path().join("raw_records_clean.csv").exists());
}

#[test]
fn test_preprocess_rejects_missing_column() {
    let mut df = create_raw_dataframe().drop("Trading Status").unwrap();
    let (_temp_dir, csv_path) = create_temp_csv(&mut df);

    Command::cargo_bin("smescore")
        .unwrap()
        .args(["preprocess", "-i"])
        .arg(&csv_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Trading Status"));
}

#[test]
fn test_audit_reports_drop_list() {
    let mut df = create_raw_dataframe();
    let (_temp_dir, csv_path) = create_temp_csv(&mut df);

    Command::cargo_bin("smescore")
        .unwrap()
        .args(["audit", "-i"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Audit complete"));
}

#[test]
fn test_predict_prints_decision_sentence() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let model_path = temp_dir.path().join("classification.json");
    std::fs::write(
        &model_path,
        r#"{
            "weights": [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            "bias": -3.0,
            "classes": ["Default", "Non-default"]
        }"#,
    )
    .unwrap();

    Command::cargo_bin("smescore")
        .unwrap()
        .args(["predict", "-m"])
        .arg(&model_path)
        .args([
            "--capital-expenditure",
            "20",
            "--cash-at-bank",
            "120",
            "--ebitda",
            "100",
            "--employees-remuneration",
            "200",
            "--profit-for-year",
            "55",
            "--retained-earnings",
            "-10",
            "--total-assets",
            "800",
            "--total-equity",
            "350",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("This loan will"))
        .stdout(predicate::str::contains("not default"));
}
