// End-to-end tests of the pairstats binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SCENARIO_CSV: &str = "date;gdp_value ;mcftr_index\n\
01.01.2020;1;3\n\
01.02.2020;2;7\n\
01.03.2020;4;15\n\
01.04.2020;3;10\n\
01.05.2020;5;17\n\
01.06.2020;3;10\n\
01.07.2020;4;15\n";

fn write_csv(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("input.csv");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_text_report_on_stdout() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, SCENARIO_CSV);

    Command::cargo_bin("pairstats")
        .unwrap()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Model summary (gdp_value → mcftr_index)"))
        .stdout(predicate::str::contains("Y = -0.579 + 3.684 * X"))
        .stdout(predicate::str::contains("R² = 0.982"));
}

#[test]
fn test_json_report_to_file() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, SCENARIO_CSV);
    let output = dir.path().join("report.json");

    Command::cargo_bin("pairstats")
        .unwrap()
        .arg(&input)
        .args(["--format", "json", "--label", "GDP → MCFTR", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Report saved to"));

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["label"], "GDP → MCFTR");
    assert_eq!(value["n"], 7);
    assert!((value["r_squared"].as_f64().unwrap() - 0.982456).abs() < 1e-6);
}

#[test]
fn test_custom_columns_and_delimiter() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "a,b\n1,2.1\n2,3.9\n3,6.2\n4,7.8\n");

    Command::cargo_bin("pairstats")
        .unwrap()
        .arg(&input)
        .args(["-x", "a", "-y", "b", "-d", ","])
        .assert()
        .success()
        .stdout(predicate::str::contains("Observations: 4"));
}

#[test]
fn test_missing_column_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "a;b\n1;2\n2;3\n3;5\n");

    Command::cargo_bin("pairstats")
        .unwrap()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("column 'gdp_value' not found"));
}

#[test]
fn test_too_few_rows_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "gdp_value;mcftr_index\n1;2\n2;3\n");

    Command::cargo_bin("pairstats")
        .unwrap()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("insufficient data"));
}

#[test]
fn test_missing_file_fails() {
    Command::cargo_bin("pairstats")
        .unwrap()
        .arg("/definitely/not/here.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open"));
}
