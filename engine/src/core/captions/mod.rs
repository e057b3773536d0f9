//! Caption Projector Module
//!
//! Projects a transcript into a time-ordered caption list and resolves the
//! caption visible at a given playhead time. Pure lookups, recomputed on
//! every playhead update; caption counts are small enough that a linear
//! scan is fine.

use serde::{Deserialize, Serialize};

use crate::core::transcript::Section;
use crate::core::TimeSec;

// =============================================================================
// Caption
// =============================================================================

/// A single caption entry with text and timing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caption {
    /// Start time in seconds
    pub start_sec: TimeSec,
    /// End time in seconds
    pub end_sec: TimeSec,
    /// Caption text
    pub text: String,
}

impl Caption {
    pub fn new(start_sec: TimeSec, end_sec: TimeSec, text: &str) -> Self {
        Self {
            start_sec,
            end_sec,
            text: text.to_string(),
        }
    }

    /// Returns true if the caption is visible at the given time.
    ///
    /// Both ends are inclusive, unlike the clip builder's gap arithmetic.
    pub fn is_visible_at(&self, time_sec: TimeSec) -> bool {
        time_sec >= self.start_sec && time_sec <= self.end_sec
    }
}

// =============================================================================
// Projection
// =============================================================================

/// Projects every transcript sentence into a caption, ordered by start time
pub fn project_captions(sections: &[Section]) -> Vec<Caption> {
    let mut captions: Vec<Caption> = sections
        .iter()
        .flat_map(|section| section.sentences.iter())
        .map(|sentence| Caption::new(sentence.start_sec, sentence.end_sec, &sentence.text))
        .collect();

    captions.sort_by(|a, b| {
        a.start_sec
            .partial_cmp(&b.start_sec)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    captions
}

/// Returns the first caption visible at `time_sec`, if any
pub fn active_caption(time_sec: TimeSec, captions: &[Caption]) -> Option<&Caption> {
    captions.iter().find(|c| c.is_visible_at(time_sec))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transcript::Sentence;

    fn sample_sections() -> Vec<Section> {
        vec![
            Section::new("sec2", "Late", 10.0, 20.0)
                .with_sentence(Sentence::new("s3", "Third", 10.0, 14.0)),
            Section::new("sec1", "Early", 0.0, 8.0)
                .with_sentence(Sentence::new("s1", "First", 0.0, 4.0))
                .with_sentence(Sentence::new("s2", "Second", 4.0, 8.0)),
        ]
    }

    #[test]
    fn test_projection_is_time_ordered() {
        let captions = project_captions(&sample_sections());

        let texts: Vec<&str> = captions.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_active_caption_basic() {
        let captions = project_captions(&sample_sections());

        assert_eq!(active_caption(2.0, &captions).unwrap().text, "First");
        assert_eq!(active_caption(12.0, &captions).unwrap().text, "Third");
        assert!(active_caption(9.0, &captions).is_none());
    }

    #[test]
    fn test_active_caption_bounds_are_inclusive() {
        let captions = vec![Caption::new(2.0, 5.0, "Only")];

        assert!(active_caption(2.0, &captions).is_some());
        assert!(active_caption(5.0, &captions).is_some());
        assert!(active_caption(5.001, &captions).is_none());
    }

    #[test]
    fn test_active_caption_prefers_first_match() {
        // Sentences sharing a boundary: the earlier caption wins at the seam
        let captions = vec![Caption::new(0.0, 4.0, "A"), Caption::new(4.0, 8.0, "B")];

        assert_eq!(active_caption(4.0, &captions).unwrap().text, "A");
    }

    #[test]
    fn test_empty_captions() {
        assert!(active_caption(1.0, &[]).is_none());
        assert!(project_captions(&[]).is_empty());
    }
}
