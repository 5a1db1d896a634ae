//! The submission pipeline: validate, resolve, dispatch, classify.
//!
//! Control flow is strictly linear per submission. Each step is a hard gate:
//! the first failure short-circuits the rest and becomes the terminal
//! outcome. There is no retry loop, and the pipeline configures no timeout
//! of its own; any timeout belongs to the underlying transport.

use crate::outcome::{SubmissionOutcome, SubmissionRequest, SubmitError};
use crate::registry::ModeRegistry;
use serde_json::Value;

/// Orchestrates one submission from raw input to terminal outcome.
pub struct SubmissionPipeline {
    client: reqwest::Client,
    registry: ModeRegistry,
}

impl SubmissionPipeline {
    /// Build a pipeline over a registry with a default HTTP client.
    pub fn new(registry: ModeRegistry) -> SubmissionPipeline {
        SubmissionPipeline::with_client(reqwest::Client::new(), registry)
    }

    /// Build a pipeline with a caller-configured HTTP client.
    pub fn with_client(client: reqwest::Client, registry: ModeRegistry) -> SubmissionPipeline {
        SubmissionPipeline { client, registry }
    }

    pub fn registry(&self) -> &ModeRegistry {
        &self.registry
    }

    /// Run one submission. Always produces exactly one outcome.
    ///
    /// Steps: trim and validate the input, resolve the mode to an endpoint,
    /// POST `{"input": <trimmed>}` as JSON, then classify the result —
    /// transport failures, non-success statuses, and undecodable bodies each
    /// map to their own error category. On success the backend payload's
    /// `result` field is extracted; a payload without one yields JSON null.
    pub async fn submit(&self, raw_input: &str, mode: &str) -> SubmissionOutcome {
        let input = raw_input.trim();
        if input.is_empty() {
            return SubmissionOutcome::Failure(SubmitError::EmptyInput);
        }

        let endpoint = match self.registry.resolve(mode) {
            Ok(endpoint) => endpoint,
            Err(err) => return SubmissionOutcome::Failure(err),
        };

        let response = match self
            .client
            .post(endpoint.as_url().clone())
            .json(&SubmissionRequest { input })
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                return SubmissionOutcome::Failure(SubmitError::Network(err.to_string()))
            }
        };

        let status = response.status();
        if !status.is_success() {
            // The body is not read for non-success statuses.
            return SubmissionOutcome::Failure(SubmitError::HttpStatus(status.as_u16()));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                return SubmissionOutcome::Failure(SubmitError::Network(err.to_string()))
            }
        };

        let payload: Value = match serde_json::from_str(&body) {
            Ok(payload) => payload,
            Err(err) => {
                log::error!("response parsing error: {}", err);
                return SubmissionOutcome::Failure(SubmitError::Parse(err.to_string()));
            }
        };

        let result = payload.get("result").cloned().unwrap_or(Value::Null);
        SubmissionOutcome::Success(result)
    }
}
