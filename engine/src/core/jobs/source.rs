//! Transcript Source Trait
//!
//! The boundary to whatever produces transcripts. Implementations may call
//! a remote service or run in-process; the engine only sees submit, poll,
//! and fetch.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use super::{HighlightJobStatus, TranscriptResult};
use crate::core::{CoreError, CoreResult, JobId};

// =============================================================================
// Transcript Source Trait
// =============================================================================

/// An asynchronous transcript/highlight provider
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Returns the source name
    fn name(&self) -> &str;

    /// Submits media for transcription, returning a job ID to poll
    async fn submit_media(&self, file_name: &str, bytes: &[u8]) -> CoreResult<JobId>;

    /// Polls the status of a submitted job
    async fn poll_status(&self, job_id: &str) -> CoreResult<HighlightJobStatus>;

    /// Fetches the result of a completed job
    async fn fetch_result(&self, job_id: &str) -> CoreResult<TranscriptResult>;
}

// =============================================================================
// Polling Driver
// =============================================================================

/// Drives a transcription job to completion: submit, poll at the given
/// interval until the job finishes, then fetch the result.
///
/// A `Failed` status becomes [`CoreError::JobFailed`]; the caller surfaces
/// it to the user, the playback core is never started without a transcript.
pub async fn run_transcription(
    source: &dyn TranscriptSource,
    file_name: &str,
    bytes: &[u8],
    poll_interval: Duration,
) -> CoreResult<TranscriptResult> {
    let job_id = source.submit_media(file_name, bytes).await?;
    info!("Submitted transcription job {} via {}", job_id, source.name());

    loop {
        match source.poll_status(&job_id).await? {
            HighlightJobStatus::Completed => break,
            HighlightJobStatus::Failed { error } => {
                return Err(CoreError::JobFailed(error));
            }
            HighlightJobStatus::Queued => {
                debug!("Job {} queued", job_id);
            }
            HighlightJobStatus::Running { progress } => {
                debug!("Job {} running: {:.0}%", job_id, progress * 100.0);
            }
        }
        tokio::time::sleep(poll_interval).await;
    }

    let result = source.fetch_result(&job_id).await?;
    info!(
        "Job {} completed: {} sections, {} suggested highlights",
        job_id,
        result.sections.len(),
        result.suggested_highlights.len()
    );
    Ok(result)
}
