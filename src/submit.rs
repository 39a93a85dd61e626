#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{io::Write, path::Path};

use anyhow::{Context, Result};

use crate::{
    constants::SOLUTION_PATTERN,
    grader::Grader,
    report,
    results::{Outcome, combine},
    util::{display_name, find_files},
};

/// Uploads every `solution.*` file stored for `assignment` and prints one
/// report per file. The assignment succeeds only if every file does; having
/// no solution at all is a failure and makes no request.
pub fn check_code(
    grader: &dyn Grader,
    assignment: &str,
    path: &Path,
    out: &mut dyn Write,
) -> Result<Outcome> {
    let sources = find_files(SOLUTION_PATTERN, path)
        .with_context(|| format!("Could not search {} for solutions", path.display()))?;

    if sources.is_empty() {
        writeln!(out, "No code found ({SOLUTION_PATTERN})")?;
        return Ok(Outcome::Failure);
    }

    let mut outcomes = Vec::with_capacity(sources.len());
    for (index, source) in sources.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }

        writeln!(out, "Checking {assignment} {} ...", display_name(source))?;
        let result = grader.submit_code(assignment, source)?;
        write!(out, "{}", report::render(&result, false))?;

        tracing::debug!("{} -> status {}", source.display(), result.status);
        outcomes.push(result.outcome());
    }

    Ok(combine(outcomes))
}
