//! Transcript Data Models
//!
//! Defines sentences, sections, and the assembled transcript as delivered by
//! a transcript source. All times are seconds within the source media.

use serde::{Deserialize, Serialize};

use crate::core::{SectionId, SentenceId, TimeSec};

// =============================================================================
// Sentence
// =============================================================================

/// Atomic transcript unit with timing and a candidate-highlight flag
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    /// Unique identifier
    pub id: SentenceId,
    /// Transcribed text
    pub text: String,
    /// Start time in seconds
    pub start_sec: TimeSec,
    /// End time in seconds
    pub end_sec: TimeSec,
    /// Whether the transcript source flagged this sentence as a highlight
    pub is_highlight: bool,
}

impl Sentence {
    /// Creates a new sentence
    pub fn new(id: &str, text: &str, start_sec: TimeSec, end_sec: TimeSec) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            start_sec,
            end_sec,
            is_highlight: false,
        }
    }

    /// Marks the sentence as a suggested highlight
    pub fn with_highlight(mut self) -> Self {
        self.is_highlight = true;
        self
    }

    /// Returns the duration of this sentence in seconds
    pub fn duration(&self) -> TimeSec {
        self.end_sec - self.start_sec
    }
}

// =============================================================================
// Section
// =============================================================================

/// A titled, time-bounded group of sentences.
///
/// Sentence ordering inside a section is a caller contract; consumers that
/// need time order (clip building, caption projection) sort their own view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Unique identifier
    pub id: SectionId,
    /// Display title
    pub title: String,
    /// Start time in seconds
    pub start_sec: TimeSec,
    /// End time in seconds
    pub end_sec: TimeSec,
    /// Sentences belonging to this section
    pub sentences: Vec<Sentence>,
}

impl Section {
    /// Creates a new section
    pub fn new(id: &str, title: &str, start_sec: TimeSec, end_sec: TimeSec) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            start_sec,
            end_sec,
            sentences: vec![],
        }
    }

    /// Adds a sentence to this section
    pub fn with_sentence(mut self, sentence: Sentence) -> Self {
        self.sentences.push(sentence);
        self
    }

    /// Returns the number of sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Returns true if the section has no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

// =============================================================================
// Transcript Data
// =============================================================================

/// Complete transcript for one media source
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptData {
    /// Sections in document order
    pub sections: Vec<Section>,
    /// Total media duration in seconds
    pub duration_sec: TimeSec,
}

impl TranscriptData {
    /// Creates a transcript from sections
    pub fn new(sections: Vec<Section>, duration_sec: TimeSec) -> Self {
        Self {
            sections,
            duration_sec,
        }
    }

    /// Iterates all sentences in section order, then sentence order
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.sections.iter().flat_map(|s| s.sentences.iter())
    }

    /// Finds a sentence by ID
    pub fn find_sentence(&self, sentence_id: &str) -> Option<&Sentence> {
        self.sentences().find(|s| s.id == sentence_id)
    }

    /// Returns the total number of sentences across all sections
    pub fn sentence_count(&self) -> usize {
        self.sections.iter().map(|s| s.sentences.len()).sum()
    }

    /// Returns true if the transcript holds no sentences
    pub fn is_empty(&self) -> bool {
        self.sentence_count() == 0
    }
}

// =============================================================================
// Tests
// =============================================================================
