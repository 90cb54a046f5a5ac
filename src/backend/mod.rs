//! Submission backend module

mod client;
mod traits;

pub use client::{spawn_submission, StubBackend, SubmissionPayload, SubmitResponse, DEFAULT_SUBMIT_DELAY};
pub use traits::SubmissionBackend;

#[cfg(test)]
pub use traits::MockSubmissionBackend;
