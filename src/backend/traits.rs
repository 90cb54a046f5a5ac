//! Trait abstraction for the submission backend to enable mocking in tests

use super::client::{SubmissionPayload, SubmitResponse};
use anyhow::Result;
use async_trait::async_trait;

/// The one operation the form needs from the backend: deliver the assembled
/// payload, get back an accept/reject, or fail in transit.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionBackend: Send + Sync {
    async fn submit(&mut self, payload: SubmissionPayload) -> Result<SubmitResponse>;
}
