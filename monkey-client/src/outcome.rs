//! Submission outcomes and the error taxonomy.
//!
//! Every submission terminates in exactly one [`SubmissionOutcome`]. The
//! error categories are exhaustive and non-overlapping: each one corresponds
//! to a single gate in the pipeline, and [`SubmissionOutcome::render`] is the
//! only place outcomes are turned into user-facing text.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// JSON body posted to an analysis endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRequest<'a> {
    /// Trimmed user text. Must be non-empty before a request is issued.
    pub input: &'a str,
}

/// Errors that can terminate a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// The trimmed input was empty; no request was issued.
    EmptyInput,
    /// The mode identifier is not in the registry (reject policy only).
    UnknownMode(String),
    /// The transport failed before a response existed.
    Network(String),
    /// A response arrived with a non-success status code.
    HttpStatus(u16),
    /// The response body was not valid JSON.
    Parse(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::EmptyInput => {
                write!(f, "El campo de entrada no puede estar vacío.")
            }
            SubmitError::UnknownMode(_) => write!(f, "Invalid Process Type"),
            SubmitError::Network(msg) => write!(f, "{}", msg),
            SubmitError::HttpStatus(code) => write!(f, "HTTP status {}", code),
            SubmitError::Parse(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Terminal result of one submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The backend payload's `result` field.
    Success(Value),
    /// A categorized failure; nothing propagates past the pipeline boundary.
    Failure(SubmitError),
}

impl SubmissionOutcome {
    /// Map the outcome to the text shown on the output surface.
    ///
    /// Successes render as 2-space-indented JSON. Failures render with an
    /// `"Error: "` prefix, except HTTP status failures which carry their own
    /// fixed wording.
    pub fn render(&self) -> String {
        match self {
            SubmissionOutcome::Success(result) => serde_json::to_string_pretty(result)
                .unwrap_or_else(|err| format!("Error: {}", err)),
            SubmissionOutcome::Failure(SubmitError::HttpStatus(code)) => {
                format!("HTTP Error {}: Unable to process input.", code)
            }
            SubmissionOutcome::Failure(err) => format!("Error: {}", err),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success(_))
    }

    /// The failure category, if this outcome is a failure.
    pub fn error(&self) -> Option<&SubmitError> {
        match self {
            SubmissionOutcome::Success(_) => None,
            SubmissionOutcome::Failure(err) => Some(err),
        }
    }
}

impl From<SubmitError> for SubmissionOutcome {
    fn from(err: SubmitError) -> Self {
        SubmissionOutcome::Failure(err)
    }
}
