//! Interactive collection of missed question numbers.
//!
//! The collector is a two-state machine (awaiting input, done). Each token is
//! fed through [`MissCollector::submit`]; [`MissCollector::run`] drives it
//! from any line reader and writer, so sessions can be scripted in tests.
//!
//! There is no iteration cap and no timeout. A session ends when the user
//! types the sentinel, or when the input stream closes.

use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::index::QuestionIndex;
use crate::model::TestDefinition;

/// Token that ends collection unless configured otherwise.
pub const DEFAULT_SENTINEL: &str = "q";

/// Question numbers the user reported as missed.
///
/// Every member is a key of the index the collector was built with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissedSet {
    numbers: BTreeSet<u32>,
}

impl MissedSet {
    pub(crate) fn insert(&mut self, number: u32) -> bool {
        self.numbers.insert(number)
    }

    pub fn contains(&self, number: u32) -> bool {
        self.numbers.contains(&number)
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Missed numbers, ascending.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.numbers.iter().copied()
    }
}

/// What happened to a single submitted token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// The sentinel was entered; collection is over.
    Finished,
    /// A new missed question was recorded.
    Recorded(u32),
    /// The question was already in the set; nothing changed.
    AlreadyRecorded(u32),
    /// The token is not a non-negative integer.
    NotANumber(String),
    /// The token is a number, but not one of this test's questions.
    NotInTest(String),
}

impl InputOutcome {
    /// Returns `true` if the token was rejected and the user should retry.
    pub fn is_rejected(&self) -> bool {
        matches!(
            self,
            InputOutcome::NotANumber(_) | InputOutcome::NotInTest(_)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CollectorState {
    AwaitingInput,
    Done,
}

/// Gathers a [`MissedSet`] for one test, validating against its index.
#[derive(Debug)]
pub struct MissCollector<'a> {
    index: &'a QuestionIndex,
    sentinel: String,
    missed: MissedSet,
    state: CollectorState,
}

impl<'a> MissCollector<'a> {
    pub fn new(index: &'a QuestionIndex) -> Self {
        Self {
            index,
            sentinel: DEFAULT_SENTINEL.to_string(),
            missed: MissedSet::default(),
            state: CollectorState::AwaitingInput,
        }
    }

    /// Use a different finishing token (matched case-insensitively).
    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    pub fn is_done(&self) -> bool {
        self.state == CollectorState::Done
    }

    /// Numbers collected so far.
    pub fn missed(&self) -> &MissedSet {
        &self.missed
    }

    pub fn into_missed(self) -> MissedSet {
        self.missed
    }

    /// Process one raw token. Once finished, further tokens are ignored.
    pub fn submit(&mut self, raw: &str) -> InputOutcome {
        let token = raw.trim();
        if self.is_done() || token.eq_ignore_ascii_case(self.sentinel.trim()) {
            self.state = CollectorState::Done;
            return InputOutcome::Finished;
        }

        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return InputOutcome::NotANumber(token.to_string());
        }

        // All digits, so parsing only fails on overflow, and no such
        // question can exist.
        let number = match token.parse::<u32>() {
            Ok(n) if self.index.contains(n) => n,
            _ => return InputOutcome::NotInTest(token.to_string()),
        };

        if self.missed.insert(number) {
            tracing::debug!(number, "recorded missed question");
            InputOutcome::Recorded(number)
        } else {
            InputOutcome::AlreadyRecorded(number)
        }
    }

    /// Prompt on `output` and read tokens from `input` until the sentinel or
    /// end of input.
    pub fn run<R: BufRead, W: Write>(
        mut self,
        mut input: R,
        mut output: W,
    ) -> io::Result<MissedSet> {
        let mut line = String::new();
        while !self.is_done() {
            write!(
                output,
                "Enter missed question # (or '{}' to finish): ",
                self.sentinel
            )?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                tracing::debug!("input closed, finishing collection");
                writeln!(output)?;
                self.state = CollectorState::Done;
                break;
            }

            match self.submit(&line) {
                InputOutcome::Finished | InputOutcome::Recorded(_) => {}
                InputOutcome::AlreadyRecorded(n) => {
                    writeln!(output, "Question {n} is already recorded.")?;
                }
                InputOutcome::NotANumber(_) => {
                    writeln!(
                        output,
                        "Please enter a valid question number (or '{}').",
                        self.sentinel
                    )?;
                }
                InputOutcome::NotInTest(_) => {
                    writeln!(output, "That question number is not in this test.")?;
                }
            }
        }

        tracing::debug!(missed = self.missed.len(), "collection finished");
        Ok(self.missed)
    }
}

/// Show a numbered menu of tests and read the user's choice.
///
/// A choice is either the menu number or the exact test name. Invalid
/// choices are retried; closing the input without choosing is an error.
pub fn select_test<'t, R: BufRead, W: Write>(
    tests: &'t [TestDefinition],
    mut input: R,
    mut output: W,
) -> Result<&'t TestDefinition> {
    anyhow::ensure!(!tests.is_empty(), "no test definitions found");

    writeln!(output, "Select a test:")?;
    for (i, test) in tests.iter().enumerate() {
        writeln!(
            output,
            "  {}) {} ({} questions)",
            i + 1,
            test.name,
            test.question_count()
        )?;
    }

    let mut line = String::new();
    loop {
        write!(output, "Test [1-{}]: ", tests.len())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("no test selected");
        }
        let choice = line.trim();

        let picked = match choice.parse::<usize>() {
            Ok(n) if (1..=tests.len()).contains(&n) => Some(&tests[n - 1]),
            _ => tests.iter().find(|t| t.name == choice),
        };

        match picked {
            Some(test) => return Ok(test),
            None => writeln!(output, "Please choose a number from 1 to {}.", tests.len())?,
        }
    }
}
