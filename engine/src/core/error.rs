//! Reelmark Error Definitions
//!
//! Defines error types used throughout the engine. Abnormal playback
//! conditions (invalid seek targets, empty clip lists) are represented as
//! state, not errors; only boundary operations return `CoreError`.

use thiserror::Error;

use super::JobId;

/// Core engine error types
#[derive(Error, Debug)]
pub enum CoreError {
    // =========================================================================
    // Transcription Job Errors
    // =========================================================================
    #[error("Transcription job not found: {0}")]
    JobNotFound(JobId),

    #[error("Transcription job failed: {0}")]
    JobFailed(String),

    #[error("Transcript not ready for job: {0}")]
    TranscriptNotReady(JobId),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    #[error("Invalid media source: {0}")]
    InvalidMediaSource(String),

    #[error("Adaptive streaming initialization failed: {0}")]
    AdaptiveInitFailed(String),

    // =========================================================================
    // General Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Core engine result type
pub type CoreResult<T> = Result<T, CoreError>;
