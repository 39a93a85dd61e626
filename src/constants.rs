#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Prefix every submittable assignment identifier starts with
pub const ASSIGNMENT_PREFIX: &str = "exercise";

/// Environment variables CI providers use to expose the branch being built,
/// in probe order (GitLab, then GitHub)
pub const BRANCH_ENV_VARS: [&str; 2] = ["CI_BUILD_REF_NAME", "GITHUB_HEAD_REF"];

/// Environment variable that routes code submissions to the debug endpoint
pub const DEBUG_ENV_VAR: &str = "DEBUG";

/// Default grader host
pub const DEFAULT_HOST: &str = "dredd.h4x0r.space";

/// Default course identifier used in endpoint paths
pub const DEFAULT_COURSE: &str = "cse-30872-sp26";

/// Default timeout for quiz submissions, in seconds
pub const DEFAULT_QUIZ_TIMEOUT_SECS: u64 = 5;

/// Default timeout for solution uploads, in seconds
pub const DEFAULT_CODE_TIMEOUT_SECS: u64 = 30;

/// Glob pattern (relative to an assignment path) matching solution files
pub const SOLUTION_PATTERN: &str = "solution.*";

/// Name of the multipart field carrying an uploaded solution
pub const SOURCE_FIELD: &str = "source";

/// Candidate answer documents, in the order they are read; a later one
/// replaces an earlier one
pub const ANSWER_FILES: [&str; 2] = ["answers.json", "answers.yaml"];

/// Response keys the reporter renders itself instead of listing them as
/// criteria
pub const RESERVED_KEYS: [&str; 4] = ["score", "status", "value", "points"];

/// Criteria rendered as a label followed by their raw multi-line text
pub const BLOCK_KEYS: [&str; 2] = ["stdout", "diff"];

/// Width the reporter right-aligns labels to
pub const LABEL_WIDTH: usize = 8;

/// Separator printed between the criteria and the score summary
pub const SEPARATOR: &str = "  --------------------";
