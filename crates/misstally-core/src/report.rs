//! Presentation records for a finished session.
//!
//! [`format_rows`] turns a [`MissBreakdown`] into display order; a
//! [`MissReport`] bundles those rows with what a renderer needs to title and
//! scale a chart.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregate::MissBreakdown;
use crate::model::TestDefinition;

/// One category, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub category: String,
    pub total: usize,
    pub missed: usize,
    pub correct: usize,
    /// `"{correct}/{total}"`.
    pub label: String,
}

/// A category's share of the errors, for an errors-only breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorShare {
    pub category: String,
    pub missed: usize,
}

/// Rows ordered by descending total. Equal totals keep the order in which
/// their categories first appear in the test.
pub fn format_rows(breakdown: &MissBreakdown) -> Vec<CategoryRow> {
    let mut rows: Vec<CategoryRow> = breakdown
        .iter()
        .map(|(category, r)| CategoryRow {
            category: category.to_string(),
            total: r.total,
            missed: r.missed,
            correct: r.correct,
            label: format!("{}/{}", r.correct, r.total),
        })
        .collect();
    // sort_by is stable
    rows.sort_by(|a, b| b.total.cmp(&a.total));
    rows
}

/// Everything a renderer needs for one test session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissReport {
    pub test_name: String,
    pub question_count: usize,
    pub missed_count: usize,
    pub correct_count: usize,
    pub created_at: DateTime<Utc>,
    pub rows: Vec<CategoryRow>,
}

impl MissReport {
    pub fn build(test: &TestDefinition, breakdown: &MissBreakdown) -> Self {
        let rows = format_rows(breakdown);
        let missed_count = breakdown.total_missed();
        let question_count = test.question_count();
        Self {
            test_name: test.name.clone(),
            question_count,
            missed_count,
            correct_count: question_count.saturating_sub(missed_count),
            created_at: Utc::now(),
            rows,
        }
    }

    /// Chart title used by renderers.
    pub fn title(&self) -> String {
        format!("Errors for {}", self.test_name)
    }

    /// Categories with at least one miss, most-missed first, ties by name.
    pub fn error_shares(&self) -> Vec<ErrorShare> {
        let mut shares: Vec<ErrorShare> = self
            .rows
            .iter()
            .filter(|r| r.missed > 0)
            .map(|r| ErrorShare {
                category: r.category.clone(),
                missed: r.missed,
            })
            .collect();
        shares.sort_by(|a, b| {
            b.missed
                .cmp(&a.missed)
                .then_with(|| a.category.cmp(&b.category))
        });
        shares
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize report")
    }

    /// Format the report as a markdown table.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("## {}\n\n", self.title()));
        md.push_str(&format!(
            "**Score:** {}/{} correct, {} missed\n\n",
            self.correct_count, self.question_count, self.missed_count
        ));

        md.push_str("| Question Type | Total | Missed | Correct | Score |\n");
        md.push_str("|---------------|-------|--------|---------|-------|\n");
        for r in &self.rows {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                r.category, r.total, r.missed, r.correct, r.label
            ));
        }

        md
    }
}
