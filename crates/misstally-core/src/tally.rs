//! Free-form tally of missed question types.
//!
//! Used when there is no test definition: the user types the category of
//! each missed question directly. Entries are capitalized ("main idea" and
//! "MAIN IDEA" both count as "Main idea") and counted in first-entry order.

use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};

/// Token that ends a tally session unless configured otherwise.
pub const DEFAULT_TALLY_SENTINEL: &str = ".q";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyEntry {
    pub category: String,
    pub count: usize,
}

/// Category counts from one tally session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    entries: Vec<TallyEntry>,
}

impl Tally {
    /// Count one entry. Blank entries are ignored.
    pub fn record(&mut self, raw: &str) -> Option<&TallyEntry> {
        let category = capitalize(raw.trim());
        if category.is_empty() {
            return None;
        }
        let pos = match self.entries.iter().position(|e| e.category == category) {
            Some(pos) => {
                self.entries[pos].count += 1;
                pos
            }
            None => {
                self.entries.push(TallyEntry { category, count: 1 });
                self.entries.len() - 1
            }
        };
        Some(&self.entries[pos])
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries in the order they were first typed.
    pub fn entries(&self) -> &[TallyEntry] {
        &self.entries
    }

    /// Entries by descending count; ties stay in first-entry order.
    pub fn sorted(&self) -> Vec<TallyEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
    }
}

/// Read categories from `input` until `sentinel` (case-insensitive) or end of
/// input.
pub fn collect_tally<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    sentinel: &str,
) -> io::Result<Tally> {
    let mut tally = Tally::default();
    let mut line = String::new();
    loop {
        write!(output, "Enter a missed question type (or '{sentinel}' to finish): ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        let token = line.trim();
        if token.eq_ignore_ascii_case(sentinel) {
            break;
        }
        if let Some(entry) = tally.record(token) {
            tracing::debug!(category = %entry.category, count = entry.count, "tallied");
        }
    }
    Ok(tally)
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
