//! Integration tests driving the lislab binary end to end.

use assert_cmd::Command;
use predicates::prelude::*;

fn lislab_cmd() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("lislab").unwrap()
}

#[test]
fn run_default_uses_patience() {
    lislab_cmd()
        .args(["run", "10", "9", "2", "5", "3", "7", "101", "18"])
        .assert()
        .success()
        .stdout(predicate::str::contains("O(n log n)"))
        .stdout(predicate::str::contains("2, 3, 7, 18"))
        .stdout(predicate::str::contains("time:"));
}

#[test]
fn run_dp_prefers_earliest_candidates() {
    lislab_cmd()
        .args(["run", "--algorithm", "dp", "10", "9", "2", "5", "3", "7", "101", "18"])
        .assert()
        .success()
        .stdout(predicate::str::contains("O(n²)"))
        .stdout(predicate::str::contains("2, 5, 7, 101"));
}

#[test]
fn run_both_prints_both_solvers() {
    lislab_cmd()
        .args(["run", "--algorithm", "both", "3", "1", "2", "1", "8", "6", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("O(n²)"))
        .stdout(predicate::str::contains("O(n log n)"));
}

#[test]
fn run_accepts_comma_separated_input() {
    lislab_cmd()
        .args(["run", "10, 9, 2, 5, 3, 7, 101, 18"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2, 3, 7, 18"));
}

#[test]
fn run_orders_words_lexicographically() {
    lislab_cmd()
        .args(["run", "pear", "apple", "fig", "grape"])
        .assert()
        .success()
        .stdout(predicate::str::contains("apple, fig, grape"));
}

#[test]
fn run_rejects_oversized_number() {
    lislab_cmd()
        .args(["run", "1", "2", "34567890"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too long"));
}

#[test]
fn run_requires_a_sequence() {
    lislab_cmd()
        .args(["run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn random_output_feeds_back_into_run() {
    let output = lislab_cmd()
        .args(["random", "--len", "8"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let items: Vec<&str> = stdout.split_whitespace().collect();
    assert_eq!(items.len(), 8, "expected 8 items, got: {stdout}");
    for item in &items {
        let value: i64 = item.parse().expect("random output should be numeric");
        assert!((0..100).contains(&value), "value out of range: {value}");
    }

    lislab_cmd()
        .arg("run")
        .arg(stdout.trim())
        .assert()
        .success()
        .stdout(predicate::str::contains("longest increasing subsequence"));
}

#[test]
fn compare_skips_dp_past_cutoff() {
    lislab_cmd()
        .args(["compare", "--sizes", "20,50", "--dp-cutoff", "30", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("benchmarking n = 20"))
        .stdout(predicate::str::contains("n = 50"))
        .stdout(predicate::str::contains("DP O(n²)"))
        .stdout(predicate::str::contains("Optimized O(n log n)"))
        .stdout(predicate::str::contains("skipped (n > 30)"))
        .stdout(predicate::str::contains("done. DP is skipped for n > 30"));
}

#[test]
fn compare_runs_dp_within_cutoff() {
    lislab_cmd()
        .args(["compare", "--sizes", "10,20", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("done."))
        .stdout(predicate::str::contains("skipped").not());
}

#[test]
fn interactive_session_runs_and_records_history() {
    lislab_cmd()
        .write_stdin("0 1 0 3 2 3\n:history\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0, 1, 2, 3"))
        .stdout(predicate::str::contains("O(n log n): input [0, 1, 0, 3, 2, 3]"))
        .stdout(predicate::str::contains("result: 0, 1, 2, 3"));
}

#[test]
fn interactive_session_warns_and_keeps_going() {
    lislab_cmd()
        .write_stdin("1234567\n1 2 3\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("too long"))
        .stdout(predicate::str::contains("1, 2, 3"));
}
