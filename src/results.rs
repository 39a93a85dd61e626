#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::BTreeMap, fmt::Display};

use serde::Deserialize;
use serde_json::Value;

/// Success or failure of one check, derived from a grader status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    /// The grader accepted the submission (status 0).
    #[default]
    Success,
    /// The grader rejected the submission, or there was nothing to submit.
    Failure,
}

impl Outcome {
    /// Maps a grader status code: 0 is success, anything else is failure.
    pub fn from_status(status: i64) -> Self {
        if status == 0 {
            Outcome::Success
        } else {
            Outcome::Failure
        }
    }

    /// Process-style code for this outcome.
    pub fn code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::Failure => 1,
        }
    }

    /// Combines two outcomes; a single failure fails the whole.
    pub fn and(self, other: Outcome) -> Outcome {
        if self == Outcome::Success && other == Outcome::Success {
            Outcome::Success
        } else {
            Outcome::Failure
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Success => write!(f, "Success"),
            Outcome::Failure => write!(f, "Failure"),
        }
    }
}

/// Folds per-file outcomes into the outcome of an assignment. Only an
/// assignment whose every file succeeded succeeds.
pub fn combine(outcomes: impl IntoIterator<Item = Outcome>) -> Outcome {
    outcomes
        .into_iter()
        .fold(Outcome::Success, Outcome::and)
}

/// Sums outcome codes into the process exit code.
pub fn exit_code(outcomes: impl IntoIterator<Item = Outcome>) -> i32 {
    outcomes.into_iter().map(Outcome::code).sum()
}

/// A criterion reported by the grader.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Criterion {
    /// A numeric sub-score.
    Number(f64),
    /// A pass/fail flag; counts as 1 or 0 wherever a number is expected.
    Flag(bool),
    /// Free text, eg. a compiler message.
    Text(String),
    /// Anything else the grader chose to send.
    Other(Value),
}

impl Criterion {
    /// The numeric value, if this criterion has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Criterion::Number(n) => Some(*n),
            Criterion::Flag(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }
}

impl Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Criterion::Number(n) => write!(f, "{n}"),
            Criterion::Flag(true) => write!(f, "True"),
            Criterion::Flag(false) => write!(f, "False"),
            Criterion::Text(s) => write!(f, "{s}"),
            Criterion::Other(v) => write!(f, "{v}"),
        }
    }
}

/// Default status for a response without one: failure.
fn default_status() -> i64 {
    1
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
/// The document the grader sends back for a quiz or a solution
pub struct SubmissionResult {
    /// * `status`: 0 when the submission passed
    #[serde(default = "default_status")]
    pub status: i64,
    /// * `score`: points awarded
    #[serde(default)]
    pub score:  f64,
    /// * `value`: points available
    #[serde(default)]
    pub value:  f64,
    /// * `points`: maximum for each named criterion
    #[serde(default)]
    pub points: Option<BTreeMap<String, f64>>,
    /// * `stdout`: program output captured by the grader
    #[serde(default)]
    pub stdout: Option<String>,
    /// * `diff`: difference between expected and actual output
    #[serde(default)]
    pub diff:   Option<String>,
    /// * `criteria`: every other named field
    #[serde(flatten)]
    pub criteria: BTreeMap<String, Criterion>,
}

impl SubmissionResult {
    /// Outcome of the submission this document describes.
    pub fn outcome(&self) -> Outcome {
        Outcome::from_status(self.status)
    }

    /// score / value when both are positive, otherwise 0.
    pub fn grade(&self) -> f64 {
        if self.score > 0.0 && self.value > 0.0 {
            self.score / self.value
        } else {
            0.0
        }
    }

    /// Every reportable field, `stdout` and `diff` included, sorted by name.
    pub fn fields(&self) -> Vec<(String, Criterion)> {
        let mut fields = self.criteria.clone();
        if let Some(stdout) = &self.stdout {
            fields.insert("stdout".into(), Criterion::Text(stdout.clone()));
        }
        if let Some(diff) = &self.diff {
            fields.insert("diff".into(), Criterion::Text(diff.clone()));
        }
        fields.into_iter().collect()
    }
}
