//! The `misstally analyze` command.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use misstally_core::aggregate::aggregate_misses;
use misstally_core::collector::{select_test, MissCollector};
use misstally_core::config::load_config_from;
use misstally_core::index::{CategoryTotals, QuestionIndex};
use misstally_core::parser;
use misstally_core::report::MissReport;

use super::OutputFormat;

pub fn execute(
    catalog_path: Option<PathBuf>,
    test_name: Option<String>,
    format: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format: OutputFormat = format.as_deref().unwrap_or(&config.format).parse()?;
    let catalog_path = catalog_path.unwrap_or_else(|| config.catalog_dir.clone());

    let catalog = parser::load_catalog(&catalog_path)?;
    anyhow::ensure!(
        !catalog.is_empty(),
        "no test definitions found in {}",
        catalog_path.display()
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let test = match &test_name {
        Some(name) => catalog.get(name).with_context(|| {
            format!("test `{name}` not found. Available: {:?}", catalog.names())
        })?,
        None => select_test(&catalog.tests, &mut input, io::stderr())?,
    };

    tracing::debug!(test = %test.name, "selected test");

    let index = QuestionIndex::build(test)?;
    let totals = CategoryTotals::from_test(test);

    eprintln!(
        "{}: {} questions in {} types",
        test.name,
        test.question_count(),
        totals.len()
    );

    let missed = MissCollector::new(&index)
        .with_sentinel(&config.sentinel)
        .run(&mut input, io::stderr())
        .context("failed to read missed questions")?;

    let breakdown = aggregate_misses(&totals, &missed, &index)
        .context("aborting: missed questions do not match the selected test")?;
    let report = MissReport::build(test, &breakdown);

    match format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Markdown => println!("{}", report.to_markdown()),
        OutputFormat::Table => print_table(&report),
    }

    Ok(())
}

fn print_table(report: &MissReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Question Type", "Total", "Missed", "Correct", "Score"]);

    for row in &report.rows {
        table.add_row(vec![
            Cell::new(&row.category),
            Cell::new(row.total),
            Cell::new(row.missed),
            Cell::new(row.correct),
            Cell::new(&row.label),
        ]);
    }

    println!("{}", report.title());
    println!("{table}");
    println!(
        "Score: {}/{} correct, {} missed",
        report.correct_count, report.question_count, report.missed_count
    );

    let shares = report.error_shares();
    if !shares.is_empty() {
        let most = shares
            .iter()
            .map(|s| format!("{} ({})", s.category, s.missed))
            .collect::<Vec<_>>()
            .join(", ");
        println!("Errors by type: {most}");
    }
}
