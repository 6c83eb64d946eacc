//! Analysis error types.
//!
//! `MalformedTest` rejects a test definition before any session starts. The
//! remaining variants signal that the index, totals and missed set were not
//! built from the same test, which is a programming error rather than a user
//! mistake.

use thiserror::Error;

/// What is wrong with a malformed test definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformation {
    /// Question numbers must be positive.
    #[error("question at position {position} has number 0")]
    ZeroNumber { position: usize },
    /// The category label is empty or only whitespace.
    #[error("question {number} has no category")]
    BlankCategory { number: u32 },
    /// The same number is used by more than one question.
    #[error("question number {number} appears more than once")]
    DuplicateNumber { number: u32 },
}

/// Errors raised while indexing or aggregating a test.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("malformed test `{test}`: {problem}")]
    MalformedTest { test: String, problem: Malformation },

    #[error("inconsistent state: missed question {number} is not in the question index")]
    UnindexedMiss { number: u32 },

    #[error(
        "inconsistent state: missed question {number} maps to category `{category}`, which has no total"
    )]
    UncountedCategory { number: u32, category: String },

    #[error("inconsistent state: category `{category}` has {missed} misses but only {total} questions")]
    OverCounted {
        category: String,
        missed: usize,
        total: usize,
    },
}

impl AnalysisError {
    /// Returns `true` for errors caused by mixing structures from different
    /// tests, as opposed to a bad test definition.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, AnalysisError::MalformedTest { .. })
    }
}
