//! # dredd
//!
//! A submission client for the dredd course grader. It works out which
//! assignments the current checkout holds, uploads their solutions (or quiz
//! answers), and prints the grader's verdict.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Endpoint and timeout configuration
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// Finding assignments in the environment
pub mod discovery;
/// Transport to the grading service
pub mod grader;
/// Quiz answer submission
pub mod quiz;
/// Rendering grader responses
pub mod report;
/// Grader response documents and outcomes
pub mod results;
/// Solution upload
pub mod submit;
/// Utility functions for convenience
pub mod util;

use std::io::Write;

use anyhow::Result;
use itertools::Itertools;
pub use config::Config;
pub use discovery::{AssignmentMap, Probes};
pub use grader::{Grader, HttpGrader};
pub use results::{Outcome, SubmissionResult};

/// Exit code used when discovery found nothing to submit
pub const NOTHING_TO_SUBMIT: i32 = 1;

/// Which kind of work to submit for each assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Upload `solution.*` files to the code endpoint.
    Code,
    /// Post `answers.{json,yaml}` to the quiz endpoint.
    Quiz,
}

/// Runs `check` for every discovered assignment, in identifier order, and
/// returns the process exit code: the number of failed assignments, or
/// [`NOTHING_TO_SUBMIT`] when `assignments` is empty, in which case the
/// grader is never contacted.
pub fn submit_all(
    grader: &dyn Grader,
    assignments: &AssignmentMap,
    check: Check,
    out: &mut dyn Write,
) -> Result<i32> {
    if assignments.is_empty() {
        writeln!(out, "Nothing to submit!")?;
        return Ok(NOTHING_TO_SUBMIT);
    }

    let mut outcomes = Vec::with_capacity(assignments.len());
    for (assignment, path) in assignments.iter() {
        tracing::debug!("Checking {assignment} at {}", path.display());
        let outcome = match check {
            Check::Code => submit::check_code(grader, assignment, path, out)?,
            Check::Quiz => quiz::check_quiz(grader, assignment, path, out)?,
        };
        outcomes.push(outcome);
    }

    Ok(results::exit_code(outcomes))
}

/// Prints each discovered assignment with the path it will be submitted
/// from. Returns [`NOTHING_TO_SUBMIT`] when there are none.
pub fn list(assignments: &AssignmentMap, out: &mut dyn Write) -> Result<i32> {
    if assignments.is_empty() {
        writeln!(out, "Nothing to submit!")?;
        return Ok(NOTHING_TO_SUBMIT);
    }

    let listing = assignments
        .iter()
        .map(|(assignment, path)| format!("{assignment} {}", path.display()))
        .join("\n");
    writeln!(out, "{listing}")?;
    Ok(0)
}
