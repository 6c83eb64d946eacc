//! End-to-end sessions: a scripted user against the T1 test.

use std::io::Cursor;

use misstally_core::aggregate::{aggregate_misses, CategoryResult};
use misstally_core::collector::{MissCollector, MissedSet};
use misstally_core::index::{CategoryTotals, QuestionIndex};
use misstally_core::model::TestDefinition;
use misstally_core::parser::parse_test_definition_str;
use misstally_core::report::{CategoryRow, MissReport};

const T1: &str = r#"{
    "name": "T1",
    "questions": [
        {"number": 1, "type": "Detail"},
        {"number": 2, "type": "Detail"},
        {"number": 3, "type": "Inference"}
    ]
}"#;

struct Session {
    missed: MissedSet,
    transcript: String,
    report: MissReport,
}

fn t1() -> TestDefinition {
    parse_test_definition_str(T1, std::path::Path::new("t1.json")).unwrap()
}

fn run_session(test: &TestDefinition, script: &str) -> Session {
    let index = QuestionIndex::build(test).unwrap();
    let totals = CategoryTotals::from_test(test);

    let mut out = Vec::new();
    let missed = MissCollector::new(&index)
        .run(Cursor::new(script), &mut out)
        .unwrap();
    let breakdown = aggregate_misses(&totals, &missed, &index).unwrap();

    Session {
        missed,
        transcript: String::from_utf8(out).unwrap(),
        report: MissReport::build(test, &breakdown),
    }
}

fn row(category: &str, total: usize, missed: usize) -> CategoryRow {
    let r = CategoryResult::new(total, missed).unwrap();
    CategoryRow {
        category: category.into(),
        total: r.total,
        missed: r.missed,
        correct: r.correct,
        label: format!("{}/{}", r.correct, r.total),
    }
}

#[test]
fn one_miss_in_detail() {
    let test = t1();
    let totals = CategoryTotals::from_test(&test);
    assert_eq!(
        totals.iter().collect::<Vec<_>>(),
        vec![("Detail", 2), ("Inference", 1)]
    );

    let session = run_session(&test, "1\nq\n");
    assert_eq!(
        session.report.rows,
        vec![row("Detail", 2, 1), row("Inference", 1, 0)]
    );
    assert_eq!(session.report.rows[0].label, "1/2");
    assert_eq!(session.report.rows[1].label, "1/1");
}

#[test]
fn number_outside_test_is_rejected() {
    let session = run_session(&t1(), "5\nq\n");
    assert!(session.missed.is_empty());
    assert!(session.transcript.contains("not in this test"));
    assert!(session.report.rows.iter().all(|r| r.missed == 0));
}

#[test]
fn text_is_rejected_then_number_accepted() {
    let session = run_session(&t1(), "abc\n2\nq\n");
    assert_eq!(session.missed.iter().collect::<Vec<_>>(), vec![2]);
    assert!(session
        .transcript
        .contains("Please enter a valid question number (or 'q')."));
}

#[test]
fn repeated_number_is_counted_once() {
    let session = run_session(&t1(), "1\n1\nq\n");
    assert_eq!(session.missed.len(), 1);
    assert_eq!(session.report.rows[0], row("Detail", 2, 1));
}

#[test]
fn uppercase_sentinel_finishes() {
    let session = run_session(&t1(), "3\nQ\n1\n");
    assert_eq!(session.missed.iter().collect::<Vec<_>>(), vec![3]);
    assert_eq!(session.report.missed_count, 1);
}
