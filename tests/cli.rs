//! End-to-end tests for the `saver` binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A data directory pinned to UTC so dates land on predictable days
fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{"utc_offset_minutes": 0, "currency_symbol": "Rs. "}"#,
    )
    .unwrap();
    dir
}

fn saver(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("saver").unwrap();
    cmd.env("EXPENSE_SAVER_DATA_DIR", dir);
    cmd
}

fn add(dir: &Path, args: &[&str]) {
    saver(dir).arg("entry").arg("add").args(args).assert().success();
}

#[test]
fn no_command_prints_usage_hint() {
    let dir = data_dir();
    saver(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("saver --help"));
}

#[test]
fn add_and_list_entries() {
    let dir = data_dir();
    add(
        dir.path(),
        &["expense", "100", "--category", "food", "--date", "2025-01-05"],
    );
    add(
        dir.path(),
        &["saving", "200", "--category", "FD", "--date", "2025-01-20"],
    );

    saver(dir.path())
        .args(["entry", "list", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Rs. 200.00"))
        .stdout(predicate::str::contains("Showing 2 of 2 entries"));

    saver(dir.path())
        .args(["entry", "list", "--type", "saving"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 of 1 entries"));
}

#[test]
fn unknown_category_is_rejected() {
    let dir = data_dir();
    saver(dir.path())
        .args(["entry", "add", "expense", "10", "--category", "FD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn missing_entry_reports_not_found() {
    let dir = data_dir();
    saver(dir.path())
        .args(["entry", "show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry not found: 42"));
}

#[test]
fn csv_statement_matches_layout() {
    let dir = data_dir();
    add(
        dir.path(),
        &["saving", "200", "--category", "FD", "--date", "2025-01-20"],
    );
    add(
        dir.path(),
        &["expense", "100", "--category", "Food", "--date", "2025-01-05"],
    );
    add(
        dir.path(),
        &["expense", "50", "--category", "Food", "--date", "2025-01-12"],
    );
    add(
        dir.path(),
        &["expense", "75", "--category", "Food", "--date", "2025-02-01"],
    );

    let out = dir.path().join("out");
    saver(dir.path())
        .args(["statement", "--period", "2025-01", "--format", "csv", "--output-dir"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 entries"));

    let csv = fs::read_to_string(out.join("statement-January-2025.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "EXPENSE SAVER STATEMENT");
    assert_eq!(lines[1], "Period: January 2025");
    assert!(lines[2].starts_with("Generated: "));
    assert_eq!(lines[4], "Date,Type,Category,Amount,Note");
    assert_eq!(lines[5], "05/01/2025,Expense,Food,100.00,");
    assert_eq!(lines[6], "12/01/2025,Expense,Food,50.00,");
    assert_eq!(lines[7], "20/01/2025,Saving,FD,200.00,");
    assert!(csv.ends_with("Total Expenses,150.00\nTotal Savings,200.00\nNet Balance,50.00\n"));

    saver(dir.path())
        .args(["audit", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("statement-January-2025.csv"));
}

#[test]
fn pdf_statement_for_empty_year() {
    let dir = data_dir();
    saver(dir.path())
        .args(["statement", "--period", "2020", "--output-dir"])
        .arg(dir.path())
        .assert()
        .success();

    let pdf = fs::read(dir.path().join("statement-Year-2020.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF-1.4\n"));
    let text = String::from_utf8(pdf).unwrap();
    assert!(text.contains("(No entries for this period.) Tj"));
}

#[test]
fn breakdown_and_chart() {
    let dir = data_dir();
    add(
        dir.path(),
        &["expense", "150", "--category", "Food", "--date", "2025-03-02"],
    );

    saver(dir.path())
        .args(["report", "breakdown", "--period", "2025-03", "--type", "expense"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100.0%"));

    let svg = dir.path().join("chart.svg");
    saver(dir.path())
        .args(["report", "chart", "--period", "2025-03", "--output"])
        .arg(&svg)
        .assert()
        .success();
    assert!(fs::read_to_string(&svg).unwrap().starts_with("<svg"));
}

#[test]
fn goals_lifecycle() {
    let dir = data_dir();
    saver(dir.path())
        .args(["goal", "add", "Laptop", "80000", "--saved", "20000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Progress:  25.0%"));

    saver(dir.path())
        .args(["goal", "edit", "laptop", "--saved", "80000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status:    Complete"));

    saver(dir.path())
        .args(["goal", "delete", "goal-1"])
        .assert()
        .success();

    saver(dir.path())
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No savings goals found."));
}

#[test]
fn import_backend_dump() {
    let dir = data_dir();
    let dump = dir.path().join("dump.json");
    fs::write(
        &dump,
        r#"[{"id": "3", "entryType": "expense", "date": 1736035200000000000, "amount": 99.5,
             "category": {"__kind__": "Some", "value": "Food"}, "note": {"__kind__": "None"}}]"#,
    )
    .unwrap();

    saver(dir.path())
        .args(["entry", "import"])
        .arg(&dump)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 new"));

    saver(dir.path())
        .args(["entry", "show", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-05"));
}

#[test]
fn backend_error_reply_is_normalized() {
    let dir = data_dir();
    let dump = dir.path().join("dump.json");
    fs::write(&dump, r#"{"error": "Actor not available"}"#).unwrap();

    saver(dir.path())
        .args(["entry", "import"])
        .arg(&dump)
        .assert()
        .failure()
        .stderr(predicate::str::contains("finish loading"));
}
