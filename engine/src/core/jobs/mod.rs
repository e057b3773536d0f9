//! Transcription Job Module
//!
//! Types for the asynchronous highlight-transcription job: submit media,
//! poll status, fetch the structured result. The engine is agnostic to the
//! transport behind the source (HTTP, in-process mock) and to the polling
//! cadence.

mod mock;
mod source;

pub use mock::*;
pub use source::*;

use serde::{Deserialize, Serialize};

use crate::core::transcript::Section;
use crate::core::{JobId, TimeRange, TimeSec};

// =============================================================================
// Job Status
// =============================================================================

/// Status of a transcription job
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HighlightJobStatus {
    /// Waiting to be processed
    #[default]
    Queued,
    /// Currently processing
    Running { progress: f32 },
    /// Result is ready to fetch
    Completed,
    /// Failed with error
    Failed { error: String },
}

impl HighlightJobStatus {
    /// Checks if the job finished, successfully or not
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed { .. })
    }
}

// =============================================================================
// Job
// =============================================================================

/// A submitted transcription job
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightJob {
    /// Unique job ID (ULID)
    pub id: JobId,
    /// Submitted file name
    pub file_name: String,
    /// Current status
    pub status: HighlightJobStatus,
    /// Creation timestamp
    pub created_at: String,
}

impl HighlightJob {
    /// Creates a freshly queued job
    pub fn new(file_name: &str) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            file_name: file_name.to_string(),
            status: HighlightJobStatus::Queued,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

// =============================================================================
// Transcript Result
// =============================================================================

/// Structured result of a completed transcription job
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptResult {
    /// Transcript sections in document order
    pub sections: Vec<Section>,
    /// Suggested-highlight time ranges
    pub suggested_highlights: Vec<TimeRange>,
    /// Playable media URL for the processed upload
    pub media_url: String,
    /// Total media duration in seconds
    pub duration_sec: TimeSec,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_creation() {
        let job = HighlightJob::new("talk.mp4");

        assert!(!job.id.is_empty());
        assert_eq!(job.file_name, "talk.mp4");
        assert_eq!(job.status, HighlightJobStatus::Queued);
    }

    #[test]
    fn test_status_is_done() {
        assert!(!HighlightJobStatus::Queued.is_done());
        assert!(!HighlightJobStatus::Running { progress: 0.4 }.is_done());
        assert!(HighlightJobStatus::Completed.is_done());
        assert!(HighlightJobStatus::Failed {
            error: "boom".to_string()
        }
        .is_done());
    }

    #[test]
    fn test_status_serialization_is_tagged() {
        let json = serde_json::to_string(&HighlightJobStatus::Running { progress: 0.5 }).unwrap();

        assert!(json.contains("\"type\":\"running\""));
        assert!(json.contains("\"progress\":0.5"));
    }
}
