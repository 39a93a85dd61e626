#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{io::Write, path::Path};

use anyhow::Result;
use serde_json::Value;
use thiserror::Error;

use crate::{constants::ANSWER_FILES, grader::Grader, report, results::Outcome};

/// Why an answers document could not be loaded.
#[derive(Debug, Error)]
pub enum AnswersError {
    /// Neither `answers.json` nor `answers.yaml` exists.
    #[error("No quiz found (answers.{{json,yaml}})")]
    Missing,
    /// A document exists but could not be read or parsed.
    #[error("Unable to parse {file}: {reason}")]
    Malformed {
        /// File name of the offending document.
        file:   String,
        /// Underlying I/O or parser message.
        reason: String,
    },
}

/// Parses `contents` according to the extension of `file`.
fn parse_answers(file: &str, contents: &str) -> Result<Value, AnswersError> {
    let parsed = if file.ends_with(".yaml") {
        serde_yaml::from_str::<Value>(contents).map_err(|e| e.to_string())
    } else {
        serde_json::from_str::<Value>(contents).map_err(|e| e.to_string())
    };

    parsed.map_err(|reason| AnswersError::Malformed {
        file: file.to_string(),
        reason,
    })
}

/// Loads the answers document stored in `path`. Every candidate is read in
/// order and a later one replaces an earlier one, so `answers.yaml` wins when
/// both exist. Any candidate that fails to parse fails the whole load.
pub fn load_answers(path: &Path) -> Result<Value, AnswersError> {
    let mut answers = None;

    for file in ANSWER_FILES {
        let candidate = path.join(file);
        if !candidate.is_file() {
            continue;
        }

        tracing::debug!("Reading quiz answers from {}", candidate.display());
        let contents =
            std::fs::read_to_string(&candidate).map_err(|e| AnswersError::Malformed {
                file:   file.to_string(),
                reason: e.to_string(),
            })?;
        answers = Some(parse_answers(file, &contents)?);
    }

    answers.ok_or(AnswersError::Missing)
}

/// Submits the quiz answers stored for `assignment` and prints the graded
/// report. Missing or malformed answers are reported and count as a failure
/// without contacting the grader.
pub fn check_quiz(
    grader: &dyn Grader,
    assignment: &str,
    path: &Path,
    out: &mut dyn Write,
) -> Result<Outcome> {
    let answers = match load_answers(path) {
        Ok(answers) => answers,
        Err(e) => {
            writeln!(out, "{e}")?;
            return Ok(Outcome::Failure);
        }
    };

    writeln!(out, "Checking {assignment} quiz ...")?;
    let result = grader.submit_quiz(assignment, &answers)?;
    write!(out, "{}", report::render(&result, true))?;
    writeln!(out)?;

    Ok(result.outcome())
}
