//! Mock Transcript Source
//!
//! In-process stand-in for the real transcription backend. Jobs progress a
//! fixed number of polls before completing and always resolve to the same
//! demo transcript, which makes the full upload → poll → fetch → playback
//! flow runnable without any service.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{HighlightJobStatus, TranscriptResult, TranscriptSource};
use crate::core::transcript::{Section, Sentence};
use crate::core::{CoreError, CoreResult, JobId, TimeRange};

/// Mock transcription backend with scripted progress
pub struct MockTranscriptSource {
    /// Polls observed per job ID
    polls: Mutex<HashMap<JobId, u32>>,
    /// Number of polls a job spends running before completing
    polls_until_complete: u32,
}

impl MockTranscriptSource {
    /// Creates a mock that completes after the given number of polls
    pub fn new(polls_until_complete: u32) -> Self {
        Self {
            polls: Mutex::new(HashMap::new()),
            polls_until_complete,
        }
    }

    /// Creates a mock that completes on the first poll
    pub fn instant() -> Self {
        Self::new(0)
    }
}

impl Default for MockTranscriptSource {
    fn default() -> Self {
        Self::new(3)
    }
}

#[async_trait]
impl TranscriptSource for MockTranscriptSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn submit_media(&self, file_name: &str, _bytes: &[u8]) -> CoreResult<JobId> {
        if file_name.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "file name must not be empty".to_string(),
            ));
        }

        let job_id = ulid::Ulid::new().to_string();
        self.polls.lock().unwrap().insert(job_id.clone(), 0);
        Ok(job_id)
    }

    async fn poll_status(&self, job_id: &str) -> CoreResult<HighlightJobStatus> {
        let mut polls = self.polls.lock().unwrap();
        let count = polls
            .get_mut(job_id)
            .ok_or_else(|| CoreError::JobNotFound(job_id.to_string()))?;

        if *count >= self.polls_until_complete {
            return Ok(HighlightJobStatus::Completed);
        }

        *count += 1;
        Ok(HighlightJobStatus::Running {
            progress: *count as f32 / (self.polls_until_complete + 1) as f32,
        })
    }

    async fn fetch_result(&self, job_id: &str) -> CoreResult<TranscriptResult> {
        let polls = self.polls.lock().unwrap();
        let count = polls
            .get(job_id)
            .ok_or_else(|| CoreError::JobNotFound(job_id.to_string()))?;

        if *count < self.polls_until_complete {
            return Err(CoreError::TranscriptNotReady(job_id.to_string()));
        }

        Ok(demo_transcript())
    }
}

// =============================================================================
// Demo Transcript
// =============================================================================

/// The canned transcript every mock job resolves to
pub fn demo_transcript() -> TranscriptResult {
    let introduction = Section::new("1", "Introduction", 0.0, 30.0)
        .with_sentence(Sentence::new(
            "s1",
            "Welcome to our video highlight tool demonstration.",
            0.0,
            5.0,
        ))
        .with_sentence(
            Sentence::new(
                "s2",
                "This tool will help you create amazing highlight clips from your videos.",
                5.0,
                12.0,
            )
            .with_highlight(),
        )
        .with_sentence(Sentence::new(
            "s3",
            "Let me show you how it works step by step.",
            12.0,
            18.0,
        ));

    let main_content = Section::new("2", "Main Content", 30.0, 120.0)
        .with_sentence(
            Sentence::new(
                "s4",
                "First, you upload your video file using the upload button.",
                30.0,
                36.0,
            )
            .with_highlight(),
        )
        .with_sentence(
            Sentence::new(
                "s5",
                "The AI will automatically analyze the content and generate a transcript.",
                36.0,
                43.0,
            )
            .with_highlight(),
        )
        .with_sentence(Sentence::new(
            "s6",
            "You can then select which sentences to include in your highlight reel.",
            43.0,
            50.0,
        ));

    let conclusion = Section::new("3", "Conclusion", 120.0, 150.0)
        .with_sentence(
            Sentence::new(
                "s7",
                "The preview will show your selected highlights with synchronized text overlay.",
                120.0,
                128.0,
            )
            .with_highlight(),
        )
        .with_sentence(Sentence::new(
            "s8",
            "Thank you for watching this demonstration.",
            128.0,
            133.0,
        ));

    TranscriptResult {
        sections: vec![introduction, main_content, conclusion],
        suggested_highlights: vec![
            TimeRange::new(5.0, 12.0),
            TimeRange::new(30.0, 43.0),
            TimeRange::new(120.0, 128.0),
        ],
        media_url: "https://media.example.com/videos/demo/source.mp4".to_string(),
        duration_sec: 150.0,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clips::suggested_selection;
    use crate::core::jobs::run_transcription;
    use std::time::Duration;

    #[tokio::test]
    async fn test_job_progresses_then_completes() {
        let source = MockTranscriptSource::new(2);
        let job_id = source.submit_media("demo.mp4", b"data").await.unwrap();

        assert!(matches!(
            source.poll_status(&job_id).await.unwrap(),
            HighlightJobStatus::Running { .. }
        ));
        assert!(matches!(
            source.poll_status(&job_id).await.unwrap(),
            HighlightJobStatus::Running { .. }
        ));
        assert_eq!(
            source.poll_status(&job_id).await.unwrap(),
            HighlightJobStatus::Completed
        );
    }

    #[tokio::test]
    async fn test_fetch_before_completion_is_rejected() {
        let source = MockTranscriptSource::new(2);
        let job_id = source.submit_media("demo.mp4", b"data").await.unwrap();

        assert!(matches!(
            source.fetch_result(&job_id).await,
            Err(CoreError::TranscriptNotReady(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_job_is_rejected() {
        let source = MockTranscriptSource::instant();

        assert!(matches!(
            source.poll_status("nope").await,
            Err(CoreError::JobNotFound(_))
        ));
        assert!(matches!(
            source.fetch_result("nope").await,
            Err(CoreError::JobNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_file_name_is_rejected() {
        let source = MockTranscriptSource::instant();

        assert!(matches!(
            source.submit_media("  ", b"data").await,
            Err(CoreError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_run_transcription_end_to_end() {
        let source = MockTranscriptSource::new(2);

        let result = run_transcription(&source, "demo.mp4", b"data", Duration::ZERO)
            .await
            .unwrap();

        assert_eq!(result.sections.len(), 3);
        assert_eq!(result.duration_sec, 150.0);
    }

    #[test]
    fn test_demo_suggestions_select_flagged_sentences() {
        let result = demo_transcript();

        let selection = suggested_selection(&result.sections, &result.suggested_highlights);

        for sentence in result.sections.iter().flat_map(|s| s.sentences.iter()) {
            assert_eq!(
                selection.contains(&sentence.id),
                sentence.is_highlight,
                "selection mismatch for {}",
                sentence.id
            );
        }
    }
}
