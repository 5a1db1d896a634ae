//! Client-side dispatch pipeline for the Monkey analysis playground.
//!
//! A user supplies a source sample and a processing mode (`lexer`,
//! `flex-lexer`, `pratt`, `evaluator`, `bytecode`). This crate resolves the
//! mode to the matching backend endpoint, performs one HTTP/JSON exchange,
//! and classifies the result into a single [`SubmissionOutcome`]. The
//! analysis backends themselves are opaque services reached over HTTP.
//!
//! # Examples
//!
//! ```no_run
//! use monkey_client::{ModeRegistry, SubmissionPipeline};
//!
//! # async fn run(registry: ModeRegistry) {
//! let pipeline = SubmissionPipeline::new(registry);
//! let outcome = pipeline.submit("let x = 5;", "pratt").await;
//! println!("{}", outcome.render());
//! # }
//! ```

pub mod mode;
pub mod outcome;
pub mod pipeline;
pub mod registry;
pub mod session;

pub use mode::ProcessingMode;
pub use outcome::{SubmissionOutcome, SubmitError};
pub use pipeline::SubmissionPipeline;
pub use registry::{EndpointAddress, ModeRegistry, UnknownModePolicy};
pub use session::{OutputSink, SubmissionSession};
