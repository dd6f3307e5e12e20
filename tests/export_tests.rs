use predicates::str::contains;
use std::fs;

mod common;
use common::{Sandbox, sample_ledger};

#[test]
fn test_export_csv_matches_ledger() {
    let sb = Sandbox::new();
    sample_ledger(&sb);
    let out = sb.path("out.csv").to_string_lossy().to_string();

    sb.run(&["export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("3 records"));

    assert_eq!(fs::read_to_string(&out).unwrap(), sb.read_ledger());
}

#[test]
fn test_export_json_range() {
    let sb = Sandbox::new();
    sample_ledger(&sb);
    let out = sb.path("out.json").to_string_lossy().to_string();

    sb.run(&[
        "export", "--format", "json", "--file", &out, "--range", "2024-05-02",
    ])
    .assert()
    .success();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["student_id"], "S1");
    assert_eq!(rows[0]["date"], "2024-05-02");
}

#[test]
fn test_export_xlsx_writes_file() {
    let sb = Sandbox::new();
    sample_ledger(&sb);
    let out = sb.path("out.xlsx").to_string_lossy().to_string();

    sb.run(&["export", "--format", "xlsx", "--file", &out])
        .assert()
        .success();

    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_requires_absolute_path() {
    let sb = Sandbox::new();
    sample_ledger(&sb);

    sb.run(&["export", "--format", "csv", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_existing_file_needs_force() {
    let sb = Sandbox::new();
    sample_ledger(&sb);
    let out = sb.write("out.csv", "keep me");

    sb.run(&["export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    sb.run(&["export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("StudentID,"));
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let sb = Sandbox::new();
    sample_ledger(&sb);
    let out = sb.path("none.csv").to_string_lossy().to_string();

    sb.run(&["export", "--file", &out, "--range", "2023"])
        .assert()
        .success()
        .stdout(contains("No records found"));
    assert!(!common::exists(&out));
}

#[test]
fn test_backup_plain_and_zip() {
    let sb = Sandbox::new();
    sample_ledger(&sb);

    let plain = sb.path("bk").join("copy.csv").to_string_lossy().to_string();
    sb.run(&["backup", "--file", &plain])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert_eq!(fs::read_to_string(&plain).unwrap(), sb.read_ledger());

    let zipped = sb.path("bk").join("copy2.csv").to_string_lossy().to_string();
    sb.run(&["backup", "--file", &zipped, "--compress"])
        .assert()
        .success();
    assert!(sb.path("bk").join("copy2.zip").exists());
    assert!(!sb.path("bk").join("copy2.csv").exists());
}
