//! The `misstally validate` command.

use std::path::PathBuf;

use anyhow::Result;

use misstally_core::index::CategoryTotals;

pub fn execute(catalog_path: PathBuf) -> Result<()> {
    let catalog = misstally_core::parser::load_catalog(&catalog_path)?;

    for test in &catalog.tests {
        let totals = CategoryTotals::from_test(test);
        println!(
            "Test: {} ({} questions, {} types)",
            test.name,
            test.question_count(),
            totals.len()
        );
    }

    for skipped in &catalog.skipped {
        println!("  [{}] SKIPPED: {}", skipped.path.display(), skipped.reason);
    }

    anyhow::ensure!(
        !catalog.is_empty(),
        "no valid test definitions in {}",
        catalog_path.display()
    );

    if catalog.skipped.is_empty() {
        println!("All test definitions valid.");
    } else {
        println!("\n{} file(s) skipped.", catalog.skipped.len());
    }

    Ok(())
}
