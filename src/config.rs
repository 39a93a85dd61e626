#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::time::Duration;

use typed_builder::TypedBuilder;

use crate::constants::{
    DEBUG_ENV_VAR, DEFAULT_CODE_TIMEOUT_SECS, DEFAULT_COURSE, DEFAULT_HOST,
    DEFAULT_QUIZ_TIMEOUT_SECS,
};

/// Grader endpoints and request settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
#[builder(doc)]
pub struct Config {
    /// Host serving the grader, without scheme (eg. `dredd.h4x0r.space`).
    /// A value that already carries a scheme is used as-is.
    #[builder(default = DEFAULT_HOST.to_string(), setter(into))]
    host:         String,
    /// Course identifier used in every endpoint path.
    #[builder(default = DEFAULT_COURSE.to_string(), setter(into))]
    course:       String,
    /// Route code submissions to the `debug` endpoint instead of `code`.
    #[builder(default)]
    debug:        bool,
    /// Timeout applied to quiz submissions.
    #[builder(default = Duration::from_secs(DEFAULT_QUIZ_TIMEOUT_SECS))]
    quiz_timeout: Duration,
    /// Timeout applied to each solution upload.
    #[builder(default = Duration::from_secs(DEFAULT_CODE_TIMEOUT_SECS))]
    code_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Config {
    /// Reads the configuration from the process environment, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self::builder()
            .host(read_string("DREDD_HOST", DEFAULT_HOST))
            .course(read_string("DREDD_COURSE", DEFAULT_COURSE))
            .debug(is_truthy(std::env::var(DEBUG_ENV_VAR).ok()))
            .quiz_timeout(read_timeout_secs("DREDD_QUIZ_TIMEOUT_SECS", DEFAULT_QUIZ_TIMEOUT_SECS))
            .code_timeout(read_timeout_secs("DREDD_CODE_TIMEOUT_SECS", DEFAULT_CODE_TIMEOUT_SECS))
            .build()
    }

    /// Returns a copy with a different host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Returns a copy with a different course identifier.
    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = course.into();
        self
    }

    /// Returns a copy with the debug endpoint toggled.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Timeout for quiz submissions.
    pub fn quiz_timeout(&self) -> Duration {
        self.quiz_timeout
    }

    /// Timeout for solution uploads.
    pub fn code_timeout(&self) -> Duration {
        self.code_timeout
    }

    /// Path segment selecting the code grading endpoint.
    pub fn code_slug(&self) -> &'static str {
        if self.debug { "debug" } else { "code" }
    }

    /// Endpoint quiz answers for `assignment` are posted to.
    pub fn quiz_url(&self, assignment: &str) -> String {
        format!("{}/quiz/{}/{assignment}", self.base_url(), self.course)
    }

    /// Endpoint solutions for `assignment` are uploaded to.
    pub fn code_url(&self, assignment: &str) -> String {
        format!("{}/{}/{}/{assignment}", self.base_url(), self.code_slug(), self.course)
    }

    /// Scheme and host, without a trailing slash.
    fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{host}")
        }
    }
}

/// Returns true for a set, non-empty value.
pub fn is_truthy(value: Option<String>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Reads a non-empty, trimmed environment variable or returns `default`.
fn read_string(env: &str, default: &str) -> String {
    std::env::var(env)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Parses an environment variable into a `Duration`, falling back to
/// `default_secs` when parsing fails or the variable is missing.
fn read_timeout_secs(env: &str, default_secs: u64) -> Duration {
    std::env::var(env)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(default_secs))
}
