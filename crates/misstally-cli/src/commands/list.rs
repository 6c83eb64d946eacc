//! The `misstally list` command.

use std::path::PathBuf;

use anyhow::Result;

use misstally_core::config::load_config_from;
use misstally_core::index::CategoryTotals;
use misstally_core::parser;

pub fn execute(catalog_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let catalog_path = catalog_path.unwrap_or(config.catalog_dir);
    let catalog = parser::load_catalog(&catalog_path)?;

    if catalog.is_empty() {
        println!(
            "No tests found in {}. Run `misstally init` to create an example.",
            catalog_path.display()
        );
        return Ok(());
    }

    for test in &catalog.tests {
        let totals = CategoryTotals::from_test(test);
        let types = totals
            .iter()
            .map(|(category, n)| format!("{category} x{n}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{} — {} questions ({types})",
            test.name,
            test.question_count()
        );
    }

    if !catalog.skipped.is_empty() {
        println!(
            "\n{} file(s) skipped; run `misstally validate` for details.",
            catalog.skipped.len()
        );
    }

    Ok(())
}
