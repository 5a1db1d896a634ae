//! Submission session: the seam between the pipeline and the visible
//! output surface.
//!
//! The pipeline itself takes `(raw_input, mode)` and returns an outcome; a
//! session owns the thin rendering step that maps outcomes onto a sink.
//! Submissions in flight cannot be cancelled, so the session keeps a
//! request-generation counter: a round trip that finishes after a newer
//! trigger has started is never rendered. The output surface therefore only
//! ever shows the latest submission's outcome.

use crate::outcome::SubmissionOutcome;
use crate::pipeline::SubmissionPipeline;
use std::sync::atomic::{AtomicU64, Ordering};

/// A single writable text surface.
///
/// The only contract is "set full contents to `text`": every write replaces
/// whatever was shown before.
pub trait OutputSink {
    fn set_output(&self, text: &str);
}

/// Ties a pipeline to an output sink across successive submissions.
pub struct SubmissionSession {
    pipeline: SubmissionPipeline,
    generation: AtomicU64,
}

impl SubmissionSession {
    pub fn new(pipeline: SubmissionPipeline) -> SubmissionSession {
        SubmissionSession {
            pipeline,
            generation: AtomicU64::new(0),
        }
    }

    pub fn pipeline(&self) -> &SubmissionPipeline {
        &self.pipeline
    }

    /// Run one submission and render its outcome into the sink, unless a
    /// newer submission started while this one was in flight.
    ///
    /// The outcome is returned either way; only the rendering is guarded.
    pub async fn submit_and_render(
        &self,
        raw_input: &str,
        mode: &str,
        sink: &dyn OutputSink,
    ) -> SubmissionOutcome {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let outcome = self.pipeline.submit(raw_input, mode).await;
        if self.generation.load(Ordering::SeqCst) == ticket {
            sink.set_output(&outcome.render());
        }
        outcome
    }
}
