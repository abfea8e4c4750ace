//! End-to-end runs of the `corr` binary.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::{NamedTempFile, TempDir};

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn corr(args: &[&str], csv: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_corr"))
        .args(args)
        .arg(csv)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

const SATISFACTION: &str = "ObservationID,LoadTime_s,Region,SatisfactionScore_100\n\
                            1,1,north,90\n\
                            2,2,south,80\n\
                            3,3,east,70\n\
                            4,4,west,60\n\
                            5,5,north,50\n";

#[test]
fn analyze_writes_json_report() {
    let csv = create_temp_csv(SATISFACTION);
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("report.json");
    let output = corr(
        &[
            "analyze",
            "--format",
            "json",
            "--no-progress",
            "--output",
            report.to_str().unwrap(),
        ],
        csv.path(),
    );
    assert!(output.status.success(), "{output:?}");

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(value["dependent_variable"], "SatisfactionScore_100");
    assert_eq!(value["findings"][0]["result"]["candidate"], "LoadTime_s");
    assert_eq!(value["findings"][0]["result"]["strength"], "strong");
    assert_eq!(value["findings"][0]["result"]["direction"], "negative");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Target: SatisfactionScore_100"));
}

#[test]
fn analyze_prints_markdown_to_stdout() {
    let csv = create_temp_csv(SATISFACTION);
    let output = corr(&["analyze", "--title", "Checkout Study"], csv.path());
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("# Checkout Study\n"));
    assert!(stdout.contains("### 1. Relationship between LoadTime_s and SatisfactionScore_100"));
}

#[test]
fn empty_result_exits_with_two() {
    let csv = create_temp_csv("RowID,Score\n1,10\n2,20\n3,30\n");
    let output = corr(&["analyze", "--target", "Score"], csv.path());
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("RowID: identifier-like"));
}

#[test]
fn unknown_target_exits_with_one() {
    let csv = create_temp_csv(SATISFACTION);
    let output = corr(&["analyze", "--target", "Revenue"], csv.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Revenue"));
}

#[test]
fn columns_lists_eligibility() {
    let csv = create_temp_csv(SATISFACTION);
    let output = corr(&["--color", "never", "columns"], csv.path());
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Target: SatisfactionScore_100"));
    assert!(stdout.contains("identifier-like"));
    assert!(stdout.contains("non-numeric"));
    assert!(stdout.contains("eligible"));
}
