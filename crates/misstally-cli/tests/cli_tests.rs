//! CLI integration tests using assert_cmd.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A `misstally` command isolated from any user config.
fn misstally(home: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("misstally").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("MISSTALLY_CATALOG_DIR")
        .env_remove("RUST_LOG");
    cmd
}

fn analyze_t1(home: &TempDir, format: &str, stdin: &str) -> assert_cmd::assert::Assert {
    misstally(home)
        .arg("analyze")
        .arg("--catalog")
        .arg(fixture("catalog"))
        .arg("--test")
        .arg("T1")
        .arg("--format")
        .arg(format)
        .write_stdin(stdin)
        .assert()
}

#[test]
fn analyze_json_orders_by_total() {
    let home = TempDir::new().unwrap();
    let output = analyze_t1(&home, "json", "1\nq\n")
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["test_name"], "T1");
    assert_eq!(report["question_count"], 3);
    assert_eq!(report["rows"][0]["category"], "Detail");
    assert_eq!(report["rows"][0]["missed"], 1);
    assert_eq!(report["rows"][0]["label"], "1/2");
    assert_eq!(report["rows"][1]["category"], "Inference");
    assert_eq!(report["rows"][1]["label"], "1/1");
}

#[test]
fn analyze_rejects_unknown_question() {
    let home = TempDir::new().unwrap();
    analyze_t1(&home, "table", "5\nq\n")
        .success()
        .stderr(predicate::str::contains("That question number is not in this test."))
        .stdout(predicate::str::contains("2/2"))
        .stdout(predicate::str::contains("Score: 3/3 correct, 0 missed"));
}

#[test]
fn analyze_retries_non_numeric_input() {
    let home = TempDir::new().unwrap();
    analyze_t1(&home, "markdown", "abc\n2\nq\n")
        .success()
        .stderr(predicate::str::contains("Please enter a valid question number"))
        .stdout(predicate::str::contains("| Detail | 2 | 1 | 1 | 1/2 |"));
}

#[test]
fn analyze_counts_repeats_once() {
    let home = TempDir::new().unwrap();
    analyze_t1(&home, "markdown", "1\n1\nq\n")
        .success()
        .stdout(predicate::str::contains("2/3 correct, 1 missed"));
}

#[test]
fn analyze_prompts_for_test_choice() {
    let home = TempDir::new().unwrap();
    // Catalog order is by path: reading.json, then t1.json.
    misstally(&home)
        .arg("analyze")
        .arg("--catalog")
        .arg(fixture("catalog"))
        .arg("--format")
        .arg("markdown")
        .write_stdin("9\n2\n3\nq\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Select a test:"))
        .stderr(predicate::str::contains("Please choose a number from 1 to 2."))
        .stdout(predicate::str::contains("Errors for T1"))
        .stdout(predicate::str::contains("| Inference | 1 | 1 | 0 | 0/1 |"));
}

#[test]
fn analyze_unknown_test_fails() {
    let home = TempDir::new().unwrap();
    misstally(&home)
        .arg("analyze")
        .arg("--catalog")
        .arg(fixture("catalog"))
        .arg("--test")
        .arg("T9")
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("test `T9` not found"));
}

#[test]
fn analyze_uses_configured_sentinel() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("misstally.toml");
    std::fs::write(
        &config,
        format!(
            "catalog_dir = {:?}\nsentinel = \"done\"\nformat = \"json\"\n",
            fixture("catalog").display().to_string()
        ),
    )
    .unwrap();

    misstally(&home)
        .arg("analyze")
        .arg("--config")
        .arg(&config)
        .arg("--test")
        .arg("T1")
        .write_stdin("q\n3\ndone\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("or 'done'"))
        .stdout(predicate::str::contains("\"missed_count\": 1"));
}

#[test]
fn list_catalog() {
    let home = TempDir::new().unwrap();
    misstally(&home)
        .arg("list")
        .arg("--catalog")
        .arg(fixture("catalog"))
        .assert()
        .success()
        .stdout(predicate::str::contains("T1 — 3 questions (Detail x2, Inference x1)"))
        .stdout(predicate::str::contains("Reading Section 2 — 10 questions"));
}

#[test]
fn validate_valid_catalog() {
    let home = TempDir::new().unwrap();
    misstally(&home)
        .arg("validate")
        .arg("--catalog")
        .arg(fixture("catalog"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Test: T1 (3 questions, 2 types)"))
        .stdout(predicate::str::contains("All test definitions valid."));
}

#[test]
fn validate_invalid_catalog() {
    let home = TempDir::new().unwrap();
    misstally(&home)
        .arg("validate")
        .arg("--catalog")
        .arg(fixture("invalid"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("SKIPPED"))
        .stdout(predicate::str::contains("more than once"))
        .stderr(predicate::str::contains("no valid test definitions"));
}

#[test]
fn validate_nonexistent_path() {
    let home = TempDir::new().unwrap();
    misstally(&home)
        .arg("validate")
        .arg("--catalog")
        .arg("nonexistent.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn tally_counts_types() {
    let home = TempDir::new().unwrap();
    misstally(&home)
        .arg("tally")
        .arg("--format")
        .arg("markdown")
        .write_stdin("detail\nTrend\nDETAIL\n.q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("| Detail | 2 |"))
        .stdout(predicate::str::contains("| Trend | 1 |"))
        .stdout(predicate::str::contains("**Total errors:** 3"));
}

#[test]
fn tally_without_entries() {
    let home = TempDir::new().unwrap();
    misstally(&home)
        .arg("tally")
        .write_stdin(".q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No errors to display."));
}

#[test]
fn init_creates_files_and_list_finds_example() {
    let dir = TempDir::new().unwrap();

    misstally(&dir)
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created misstally.toml"))
        .stdout(predicate::str::contains("Created tests/example.json"));

    assert!(dir.path().join("misstally.toml").exists());
    assert!(dir.path().join("tests/example.json").exists());

    misstally(&dir)
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Example Reading Section — 8 questions"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    misstally(&dir)
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    misstally(&dir)
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    let home = TempDir::new().unwrap();
    misstally(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tally missed quiz questions"));
}

#[test]
fn version_output() {
    let home = TempDir::new().unwrap();
    misstally(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("misstally"));
}
