//! Per-category miss aggregation.

use serde::{Deserialize, Serialize};

use crate::collector::MissedSet;
use crate::error::AnalysisError;
use crate::index::{CategoryTotals, QuestionIndex};

/// Total, missed and correct counts for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub total: usize,
    pub missed: usize,
    pub correct: usize,
}

impl CategoryResult {
    /// Returns `None` if `missed` exceeds `total`.
    pub fn new(total: usize, missed: usize) -> Option<Self> {
        let correct = total.checked_sub(missed)?;
        Some(Self {
            total,
            missed,
            correct,
        })
    }
}

/// Category → [`CategoryResult`] for every category of a test, in the order
/// the categories first appear in the test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissBreakdown {
    entries: Vec<(String, CategoryResult)>,
}

impl MissBreakdown {
    pub fn get(&self, category: &str) -> Option<&CategoryResult> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, r)| r)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryResult)> {
        self.entries.iter().map(|(c, r)| (c.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_missed(&self) -> usize {
        self.entries.iter().map(|(_, r)| r.missed).sum()
    }
}

/// Combine category totals with the missed set.
///
/// Every category in `totals` appears in the result, with `missed = 0` when
/// none of its questions were missed. The three inputs must come from the
/// same test; a missed number the index does not know, or a category the
/// totals do not know, is reported as an inconsistent-state error.
pub fn aggregate_misses(
    totals: &CategoryTotals,
    missed: &MissedSet,
    index: &QuestionIndex,
) -> Result<MissBreakdown, AnalysisError> {
    let mut missed_counts: Vec<usize> = vec![0; totals.len()];
    let positions: Vec<&str> = totals.iter().map(|(c, _)| c).collect();

    for number in missed.iter() {
        let category = index
            .category(number)
            .ok_or(AnalysisError::UnindexedMiss { number })?;
        let pos = positions
            .iter()
            .position(|c| *c == category)
            .ok_or_else(|| AnalysisError::UncountedCategory {
                number,
                category: category.to_string(),
            })?;
        missed_counts[pos] += 1;
    }

    let entries = totals
        .iter()
        .zip(missed_counts)
        .map(|((category, total), missed)| {
            CategoryResult::new(total, missed)
                .map(|r| (category.to_string(), r))
                .ok_or_else(|| AnalysisError::OverCounted {
                    category: category.to_string(),
                    missed,
                    total,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MissBreakdown { entries })
}
