//! Lookups derived from a test definition.
//!
//! [`QuestionIndex`] maps question numbers to categories and is the authority
//! the collector validates input against. [`CategoryTotals`] counts questions
//! per category. Both are rebuilt for every session.

use std::collections::HashMap;

use crate::error::{AnalysisError, Malformation};
use crate::model::TestDefinition;

/// Question number → category label for one test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionIndex {
    categories: HashMap<u32, String>,
}

impl QuestionIndex {
    /// Build the index, rejecting tests with zero numbers, blank categories
    /// or repeated numbers.
    pub fn build(test: &TestDefinition) -> Result<Self, AnalysisError> {
        let malformed = |problem| AnalysisError::MalformedTest {
            test: test.name.clone(),
            problem,
        };

        let mut categories = HashMap::with_capacity(test.questions.len());
        for (position, q) in test.questions.iter().enumerate() {
            if q.number == 0 {
                return Err(malformed(Malformation::ZeroNumber { position }));
            }
            if q.category.trim().is_empty() {
                return Err(malformed(Malformation::BlankCategory { number: q.number }));
            }
            if categories.insert(q.number, q.category.clone()).is_some() {
                return Err(malformed(Malformation::DuplicateNumber { number: q.number }));
            }
        }

        Ok(Self { categories })
    }

    /// Category of a question, if the number belongs to the test.
    pub fn category(&self, number: u32) -> Option<&str> {
        self.categories.get(&number).map(String::as_str)
    }

    pub fn contains(&self, number: u32) -> bool {
        self.categories.contains_key(&number)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// All indexed question numbers, ascending.
    pub fn numbers(&self) -> Vec<u32> {
        let mut numbers: Vec<u32> = self.categories.keys().copied().collect();
        numbers.sort_unstable();
        numbers
    }
}

/// Category label → number of questions, in order of first appearance.
///
/// Labels are compared exactly; "Detail" and "detail " are different
/// categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    entries: Vec<(String, usize)>,
    positions: HashMap<String, usize>,
}

impl CategoryTotals {
    pub fn from_test(test: &TestDefinition) -> Self {
        let mut totals = Self::default();
        for q in &test.questions {
            match totals.positions.get(&q.category) {
                Some(&pos) => totals.entries[pos].1 += 1,
                None => {
                    totals
                        .positions
                        .insert(q.category.clone(), totals.entries.len());
                    totals.entries.push((q.category.clone(), 1));
                }
            }
        }
        totals
    }

    /// Question count for a category, or `None` if the test has no such
    /// category.
    pub fn get(&self, category: &str) -> Option<usize> {
        self.positions.get(category).map(|&pos| self.entries[pos].1)
    }

    /// `(category, total)` pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(c, n)| (c.as_str(), *n))
    }

    /// Number of distinct categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all category counts; equals the test's question count.
    pub fn question_count(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }
}
