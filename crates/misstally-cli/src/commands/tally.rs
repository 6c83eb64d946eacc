//! The `misstally tally` command.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use misstally_core::config::load_config_from;
use misstally_core::tally::{collect_tally, Tally};

use super::OutputFormat;

pub fn execute(format: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format: OutputFormat = format.as_deref().unwrap_or(&config.format).parse()?;

    let tally = collect_tally(io::stdin().lock(), io::stderr(), &config.tally_sentinel)
        .context("failed to read question types")?;

    if tally.is_empty() {
        println!("No errors to display.");
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "total": tally.total(),
                "entries": tally.sorted(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Markdown => print_markdown(&tally),
        OutputFormat::Table => print_table(&tally),
    }

    Ok(())
}

fn print_markdown(tally: &Tally) {
    println!("## Errors\n");
    println!("| Question Type | Errors |");
    println!("|---------------|--------|");
    for entry in tally.sorted() {
        println!("| {} | {} |", entry.category, entry.count);
    }
    println!("\n**Total errors:** {}", tally.total());
}

fn print_table(tally: &Tally) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Question Type", "Errors"]);
    for entry in tally.sorted() {
        table.add_row(vec![Cell::new(&entry.category), Cell::new(entry.count)]);
    }

    println!("{table}");
    println!("Total errors: {}", tally.total());
}
