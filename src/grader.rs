#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::Path;

use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response, multipart};
use serde_json::Value;

use crate::{
    config::Config,
    constants::SOURCE_FIELD,
    results::SubmissionResult,
    util::display_name,
};

/// Something that can score submissions.
pub trait Grader {
    /// Submits a quiz answers document for `assignment`.
    fn submit_quiz(&self, assignment: &str, answers: &Value) -> Result<SubmissionResult>;

    /// Uploads the solution at `source` for `assignment`.
    fn submit_code(&self, assignment: &str, source: &Path) -> Result<SubmissionResult>;
}

/// The remote dredd service, reached over blocking HTTP.
pub struct HttpGrader {
    /// Endpoint and timeout settings.
    config: Config,
    /// Shared client for every request of the run.
    client: Client,
}

impl HttpGrader {
    /// Creates a grader for the endpoints described by `config`.
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to construct HTTP client")?;
        Ok(Self { config, client })
    }
}

/// Decodes a grader response into a [`SubmissionResult`].
fn parse_response(url: &str, response: Response) -> Result<SubmissionResult> {
    let status = response.status();
    let body = response
        .text()
        .with_context(|| format!("Could not read the response from {url}"))?;

    tracing::debug!("{url} answered {status}: {body}");

    serde_json::from_str(&body)
        .with_context(|| format!("Unexpected response from {url} ({status}): {body}"))
}

impl Grader for HttpGrader {
    fn submit_quiz(&self, assignment: &str, answers: &Value) -> Result<SubmissionResult> {
        let url = self.config.quiz_url(assignment);
        tracing::debug!("Posting quiz answers to {url}");

        let body = serde_json::to_string(answers).context("Could not serialize quiz answers")?;
        let response = self
            .client
            .post(&url)
            .timeout(self.config.quiz_timeout())
            .body(body)
            .send()
            .with_context(|| format!("Cannot reach {url}"))?;

        parse_response(&url, response)
    }

    fn submit_code(&self, assignment: &str, source: &Path) -> Result<SubmissionResult> {
        let url = self.config.code_url(assignment);
        tracing::debug!("Uploading {} to {url}", source.display());

        let contents = std::fs::read(source)
            .with_context(|| format!("Could not read {}", source.display()))?;
        let part = multipart::Part::bytes(contents).file_name(display_name(source));
        let form = multipart::Form::new().part(SOURCE_FIELD, part);

        let response = self
            .client
            .post(&url)
            .timeout(self.config.code_timeout())
            .multipart(form)
            .send()
            .with_context(|| format!("Cannot reach {url}"))?;

        parse_response(&url, response)
    }
}
