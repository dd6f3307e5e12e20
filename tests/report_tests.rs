use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{Sandbox, sample_ledger};

#[test]
fn test_list_all_in_insertion_order() {
    let sb = Sandbox::new();
    sample_ledger(&sb);

    let out = sb.run(&["list"]).assert().success().get_output().stdout.clone();
    let out = String::from_utf8(out).unwrap();

    let bob = out.find("Bob").unwrap();
    let alice_second_day = out.find("2024-05-02").unwrap();
    assert!(bob < alice_second_day);
    assert!(out.contains("Records: 3"));
}

#[test]
fn test_list_single_date() {
    let sb = Sandbox::new();
    sample_ledger(&sb);

    sb.run(&["list", "--date", "2024-05-02"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("Bob").not())
        .stdout(contains("Records: 1"));
}

#[test]
fn test_list_period_without_matches_is_not_an_error() {
    let sb = Sandbox::new();
    sample_ledger(&sb);

    sb.run(&["list", "--period", "2023"])
        .assert()
        .success()
        .stdout(contains("No attendance records"));
}

#[test]
fn test_list_rejects_bad_period() {
    let sb = Sandbox::new();
    sample_ledger(&sb);

    sb.run(&["list", "--period", "2024-06:2024-05"])
        .assert()
        .failure()
        .stderr(contains("ends before it starts"));
}

#[test]
fn test_stats_total_matches_rows() {
    let sb = Sandbox::new();
    sample_ledger(&sb);

    sb.run(&["stats"])
        .assert()
        .success()
        .stdout(contains("2024-05-01 Wed  2"))
        .stdout(contains("2024-05-02 Thu  1"))
        .stdout(contains("3 records over 2 days"));
}

#[test]
fn test_stats_on_missing_ledger() {
    let sb = Sandbox::new();

    sb.run(&["stats"])
        .assert()
        .success()
        .stdout(contains("The ledger is empty"));
}
