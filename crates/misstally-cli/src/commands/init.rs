//! The `misstally init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    if Path::new("misstally.toml").exists() {
        println!("misstally.toml already exists, skipping.");
    } else {
        std::fs::write("misstally.toml", SAMPLE_CONFIG)?;
        println!("Created misstally.toml");
    }

    std::fs::create_dir_all("tests")?;
    let example_path = Path::new("tests/example.json");
    if example_path.exists() {
        println!("tests/example.json already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_TEST)?;
        println!("Created tests/example.json");
    }

    println!("\nNext steps:");
    println!("  1. Add one .json file per test to tests/");
    println!("  2. Run: misstally validate --catalog tests");
    println!("  3. Run: misstally analyze");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# misstally configuration

# Directory scanned for test definition .json files
catalog_dir = "tests"

# Token that finishes missed-question entry
sentinel = "q"

# Token that finishes `misstally tally`
tally_sentinel = ".q"

# Output format: table, markdown, json
format = "table"
"#;

const EXAMPLE_TEST: &str = r#"{
  "name": "Example Reading Section",
  "questions": [
    { "number": 1, "type": "Main Idea" },
    { "number": 2, "type": "Detail" },
    { "number": 3, "type": "Inference" },
    { "number": 4, "type": "Detail" },
    { "number": 5, "type": "Author Attitude" },
    { "number": 6, "type": "Inference" },
    { "number": 7, "type": "Detail" },
    { "number": 8, "type": "Trend" }
  ]
}
"#;
