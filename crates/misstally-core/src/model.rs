//! Core data model types for misstally.
//!
//! A [`TestDefinition`] is the single source of truth for one quiz: every
//! derived structure (index, totals, missed set, results) is built from it.

use serde::{Deserialize, Serialize};

/// One question of a test and the category it is tagged with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSpec {
    /// Test-local question number (positive).
    pub number: u32,
    /// Category label, e.g. "Detail" or "Inference".
    #[serde(rename = "type")]
    pub category: String,
}

impl QuestionSpec {
    pub fn new(number: u32, category: impl Into<String>) -> Self {
        Self {
            number,
            category: category.into(),
        }
    }
}

/// A quiz/test: a name plus its ordered questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestDefinition {
    /// Unique, human-readable identifier.
    pub name: String,
    /// Questions in document order.
    pub questions: Vec<QuestionSpec>,
}

impl TestDefinition {
    pub fn new(name: impl Into<String>, questions: Vec<QuestionSpec>) -> Self {
        Self {
            name: name.into(),
            questions,
        }
    }

    /// Number of questions in the test.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
