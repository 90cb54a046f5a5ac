//! Submission backend types and the stub client
//!
//! The production service is an external collaborator with its own multipart
//! HTTP contract; here only the stub lives, resolving success after a fixed
//! delay the way the reference behavior does.

use super::traits::SubmissionBackend;
use crate::state::FileHandle;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::oneshot;

/// Fixed key the file travels under in the payload
pub const FILE_FIELD_KEY: &str = "pdfInvoice";

/// Default stub latency, matching the reference behavior
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(2000);

/// Assembled form data: serialized field pairs plus the file under
/// [`FILE_FIELD_KEY`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub fields: Vec<(String, String)>,
    pub file_key: &'static str,
    pub file: FileHandle,
}

impl SubmissionPayload {
    pub fn new(fields: Vec<(String, String)>, file: FileHandle) -> Self {
        Self {
            fields,
            file_key: FILE_FIELD_KEY,
            file,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Backend verdict on a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: Option<String>,
}

/// Deliver a payload on a background task so the event loop keeps drawing
/// and polling while the backend works. The receiver resolves with the
/// backend's verdict and is meant to be polled from the frame tick.
pub fn spawn_submission<B>(
    mut backend: B,
    payload: SubmissionPayload,
) -> oneshot::Receiver<Result<SubmitResponse>>
where
    B: SubmissionBackend + 'static,
{
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let _ = tx.send(backend.submit(payload).await);
    });
    rx
}

/// Always-succeeding stand-in for the real submission endpoint
#[derive(Clone)]
pub struct StubBackend {
    delay: Duration,
}

impl StubBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for StubBackend {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl SubmissionBackend for StubBackend {
    async fn submit(&mut self, payload: SubmissionPayload) -> Result<SubmitResponse> {
        tokio::time::sleep(self.delay).await;
        tracing::info!(
            fields = payload.fields.len(),
            file = %payload.file.name,
            size = payload.file.size,
            "stub backend accepted submission"
        );
        Ok(SubmitResponse {
            success: true,
            message: Some("Invoice submitted successfully!".to_string()),
        })
    }
}
