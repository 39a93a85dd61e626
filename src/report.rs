#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Renders grader responses for the terminal.
//!
//! ```text
//!    Tests  7.50 / 10.00
//!   --------------------
//!    Score  7.50 / 10.00
//!    Grade  0.75 / 1.00
//!   Status Failure
//! ```

use std::fmt::Write;

use crate::{
    constants::{BLOCK_KEYS, LABEL_WIDTH, RESERVED_KEYS, SEPARATOR},
    results::{Criterion, SubmissionResult},
};

/// Upper-cases the first letter of every run of letters and lower-cases the
/// rest, so `test_cases` becomes `Test_Cases`.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_word = false;

    for c in name.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

/// Renders one criterion line (or block, for `stdout`/`diff`).
fn render_field(out: &mut String, result: &SubmissionResult, name: &str, value: &Criterion) {
    let label = title_case(name);
    let number = value.as_number();

    match (&result.points, number) {
        (Some(points), Some(n)) if points.contains_key(name) => {
            let _ = writeln!(out, "{label:>LABEL_WIDTH$} {n:5.2} / {:5.2}", points[name]);
        }
        (None, Some(n)) => {
            let _ = writeln!(out, "{label:>LABEL_WIDTH$} {n:5.2}");
        }
        _ if BLOCK_KEYS.contains(&name) => {
            let _ = writeln!(out, "{label:>LABEL_WIDTH$}\n{value}");
        }
        _ => {
            let _ = writeln!(out, "{label:>LABEL_WIDTH$} {value}");
        }
    }
}

/// Formats `result` as a human-readable report. The trailing status line is
/// included only when `show_status` is set.
pub fn render(result: &SubmissionResult, show_status: bool) -> String {
    let mut out = String::new();

    for (name, value) in result.fields() {
        if RESERVED_KEYS.contains(&name.as_str()) {
            continue;
        }
        render_field(&mut out, result, &name, &value);
    }

    let _ = writeln!(out, "{SEPARATOR}");
    let _ = writeln!(out, "{:>LABEL_WIDTH$} {:5.2} / {:5.2}", "Score", result.score, result.value);
    let _ = writeln!(out, "{:>LABEL_WIDTH$} {:5.2} / 1.00", "Grade", result.grade());
    if show_status {
        let _ = writeln!(out, "{:>LABEL_WIDTH$} {}", "Status", result.outcome());
    }

    out
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(value: serde_json::Value) -> SubmissionResult {
        serde_json::from_value(value).expect("valid response")
    }

    #[test]
    fn title_case_matches_word_boundaries() {
        assert_eq!(title_case("stdout"), "Stdout");
        assert_eq!(title_case("test_cases"), "Test_Cases");
        assert_eq!(title_case("UNIT tests"), "Unit Tests");
        assert_eq!(title_case("test2case"), "Test2Case");
    }

    #[test]
    fn partial_score_with_points() {
        let report = render(
            &parse(json!({"score": 7.5, "value": 10, "status": 1, "points": {"tests": 10}})),
            true,
        );

        assert!(report.contains("Score  7.50 / 10.00"), "{report}");
        assert!(report.contains("Grade  0.75 / 1.00"), "{report}");
        assert!(report.contains("Status Failure"), "{report}");
    }

    #[test]
    fn zero_total_does_not_divide() {
        let report = render(&parse(json!({"score": 0, "value": 0, "status": 0})), true);
        assert!(report.contains("Grade  0.00 / 1.00"), "{report}");
        assert!(report.contains("Status Success"), "{report}");
    }

    #[test]
    fn status_line_is_optional() {
        let report = render(&parse(json!({"score": 1, "value": 1, "status": 0})), false);
        assert!(!report.contains("Status"));
        assert!(report.ends_with("   Grade  1.00 / 1.00\n"), "{report}");
    }

    #[test]
    fn criteria_render_against_points() {
        let report = render(
            &parse(json!({
                "score": 3,
                "value": 4,
                "status": 0,
                "points": {"tests": 3, "style": 1},
                "tests": 2,
                "style": 1,
                "notes": 5
            })),
            false,
        );

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines,
            vec![
                "   Notes 5",
                "   Style  1.00 /  1.00",
                "   Tests  2.00 /  3.00",
                SEPARATOR,
                "   Score  3.00 /  4.00",
                "   Grade  0.75 / 1.00",
            ]
        );
    }

    #[test]
    fn criteria_without_points_show_value() {
        let report = render(&parse(json!({"status": 0, "tests": 1.25, "note": "late"})), false);
        assert!(report.contains("    Note late\n"), "{report}");
        assert!(report.contains("   Tests  1.25\n"), "{report}");
    }

    #[test]
    fn flags_format_like_numbers() {
        let report = render(&parse(json!({"status": 0, "compiled": true, "linted": false})), false);
        assert!(report.contains("Compiled  1.00\n"), "{report}");
        assert!(report.contains("  Linted  0.00\n"), "{report}");

        let report = render(
            &parse(json!({"status": 0, "points": {"tests": 1}, "compiled": true})),
            false,
        );
        assert!(report.contains("Compiled True\n"), "{report}");
    }

    #[test]
    fn stdout_keeps_line_breaks() {
        let report = render(
            &parse(json!({"status": 1, "stdout": "line one\nline two\n", "diff": "- a\n+ b"})),
            true,
        );

        assert!(report.contains("    Diff\n- a\n+ b\n"), "{report}");
        assert!(report.contains("  Stdout\nline one\nline two\n"), "{report}");
        assert!(!report.contains("\\n"));
    }
}
