//! Clip Builder Module
//!
//! Pure derivation of playable clips from the highlight selection. Selected
//! sentences are flattened across sections, time-sorted, and folded into
//! merged ranges: neighbors closer than the merge tolerance become one clip.
//!
//! Clips are never patched incrementally: any change to the selection or
//! the transcript rebuilds the whole list, so a stale clip cannot survive a
//! partial update.

use serde::{Deserialize, Serialize};

use crate::core::transcript::{Section, SelectionSet, Sentence};
use crate::core::{TimeRange, TimeSec};

/// Maximum gap between two selected sentences that still merges them into a
/// single clip, in seconds. Fixed policy constant.
pub const MERGE_GAP_SEC: TimeSec = 1.0;

// =============================================================================
// Clip
// =============================================================================

/// A merged, continuous playable time range derived from one or more
/// adjacent selected sentences
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clip {
    /// Start time in seconds
    pub start_sec: TimeSec,
    /// End time in seconds
    pub end_sec: TimeSec,
}

impl Clip {
    pub fn new(start_sec: TimeSec, end_sec: TimeSec) -> Self {
        Self { start_sec, end_sec }
    }

    /// Returns the duration of this clip in seconds
    pub fn duration(&self) -> TimeSec {
        self.end_sec - self.start_sec
    }

    /// Checks if a time point is within this clip (inclusive on both ends)
    pub fn contains(&self, time_sec: TimeSec) -> bool {
        time_sec >= self.start_sec && time_sec <= self.end_sec
    }
}

// =============================================================================
// Clip Building
// =============================================================================

/// Builds the ordered clip list for a selection.
///
/// Output invariants: clips are strictly ordered by start time,
/// non-overlapping, and adjacent clips are separated by more than
/// [`MERGE_GAP_SEC`] seconds.
pub fn build_clips(selected: &SelectionSet, sections: &[Section]) -> Vec<Clip> {
    if selected.is_empty() {
        return vec![];
    }

    // Flatten in section order, keep only selected sentences
    let mut picked: Vec<&Sentence> = sections
        .iter()
        .flat_map(|section| section.sentences.iter())
        .filter(|sentence| selected.contains(&sentence.id))
        .collect();

    if picked.is_empty() {
        return vec![];
    }

    // Stable sort preserves flatten order for equal start times
    picked.sort_by(|a, b| {
        a.start_sec
            .partial_cmp(&b.start_sec)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut clips: Vec<Clip> = Vec::new();
    let mut current = Clip::new(picked[0].start_sec, picked[0].end_sec);

    for sentence in &picked[1..] {
        if sentence.start_sec - current.end_sec <= MERGE_GAP_SEC {
            current.end_sec = current.end_sec.max(sentence.end_sec);
        } else {
            clips.push(current);
            current = Clip::new(sentence.start_sec, sentence.end_sec);
        }
    }
    clips.push(current);

    clips
}

/// Finds the index of the clip containing `time_sec`, if any.
///
/// Containment is inclusive on both ends, so a clip's exact end time still
/// counts as inside it.
pub fn find_clip_index(clips: &[Clip], time_sec: TimeSec) -> Option<usize> {
    clips.iter().position(|clip| clip.contains(time_sec))
}

// =============================================================================
// Suggested Highlights
// =============================================================================

/// Computes the selection implied by the source's suggested-highlight ranges:
/// every sentence whose `[start, end]` lies inclusively within any suggestion
/// range. The caller replaces its selection with the result (full overwrite).
pub fn suggested_selection(sections: &[Section], ranges: &[TimeRange]) -> SelectionSet {
    let mut selection = SelectionSet::new();

    for section in sections {
        for sentence in &section.sentences {
            let span = TimeRange::new(sentence.start_sec, sentence.end_sec);
            if ranges.iter().any(|range| range.encloses(&span)) {
                selection.insert(&sentence.id);
            }
        }
    }

    selection
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sections_from(sentences: Vec<Sentence>) -> Vec<Section> {
        let mut section = Section::new("sec1", "All", 0.0, 1000.0);
        section.sentences = sentences;
        vec![section]
    }

    fn select_all(sections: &[Section]) -> SelectionSet {
        SelectionSet::from_ids(
            sections
                .iter()
                .flat_map(|s| s.sentences.iter())
                .map(|s| s.id.clone()),
        )
    }

    // -------------------------------------------------------------------------
    // Merge Behavior
    // -------------------------------------------------------------------------

    #[test]
    fn test_empty_selection_yields_no_clips() {
        let sections = sections_from(vec![Sentence::new("s1", "a", 0.0, 5.0)]);

        assert!(build_clips(&SelectionSet::new(), &sections).is_empty());
        assert!(build_clips(&select_all(&sections), &[]).is_empty());
    }

    #[test]
    fn test_gap_at_tolerance_merges() {
        // Gap of exactly 1.0 seconds merges into one clip
        let sections = sections_from(vec![
            Sentence::new("s1", "a", 0.0, 5.0),
            Sentence::new("s2", "b", 6.0, 9.0),
        ]);

        let clips = build_clips(&select_all(&sections), &sections);

        assert_eq!(clips, vec![Clip::new(0.0, 9.0)]);
    }

    #[test]
    fn test_gap_over_tolerance_splits() {
        // Gap of 1.01 seconds produces two clips
        let sections = sections_from(vec![
            Sentence::new("s1", "a", 0.0, 5.0),
            Sentence::new("s2", "b", 6.01, 9.0),
        ]);

        let clips = build_clips(&select_all(&sections), &sections);

        assert_eq!(clips, vec![Clip::new(0.0, 5.0), Clip::new(6.01, 9.0)]);
    }

    #[test]
    fn test_zero_gap_merges() {
        let sections = sections_from(vec![
            Sentence::new("s1", "a", 0.0, 5.0),
            Sentence::new("s2", "b", 5.0, 12.0),
        ]);

        let clips = build_clips(&select_all(&sections), &sections);

        assert_eq!(clips, vec![Clip::new(0.0, 12.0)]);
    }

    #[test]
    fn test_unselected_sentences_are_skipped() {
        let sections = sections_from(vec![
            Sentence::new("s1", "a", 0.0, 5.0),
            Sentence::new("s2", "b", 5.0, 12.0),
            Sentence::new("s3", "c", 12.0, 18.0),
            Sentence::new("s4", "d", 30.0, 36.0),
        ]);
        let selection = SelectionSet::from_ids(["s1", "s2", "s4"]);

        let clips = build_clips(&selection, &sections);

        assert_eq!(clips, vec![Clip::new(0.0, 12.0), Clip::new(30.0, 36.0)]);
    }

    #[test]
    fn test_out_of_order_input_is_sorted() {
        let sections = sections_from(vec![
            Sentence::new("s2", "b", 6.01, 9.0),
            Sentence::new("s1", "a", 0.0, 5.0),
        ]);

        let clips = build_clips(&select_all(&sections), &sections);

        assert_eq!(clips, vec![Clip::new(0.0, 5.0), Clip::new(6.01, 9.0)]);
    }

    #[test]
    fn test_deterministic_rebuild() {
        let sections = sections_from(vec![
            Sentence::new("s1", "a", 0.0, 5.0),
            Sentence::new("s2", "b", 5.5, 9.0),
            Sentence::new("s3", "c", 20.0, 25.0),
        ]);
        let selection = select_all(&sections);

        let first = build_clips(&selection, &sections);
        let second = build_clips(&selection, &sections);

        assert_eq!(first, second);
    }

    #[test]
    fn test_adjacent_clips_never_overlap() {
        let sections = sections_from(vec![
            Sentence::new("s1", "a", 0.0, 4.0),
            Sentence::new("s2", "b", 4.5, 8.0),
            Sentence::new("s3", "c", 10.0, 14.0),
            Sentence::new("s4", "d", 16.0, 20.0),
        ]);

        let clips = build_clips(&select_all(&sections), &sections);

        for pair in clips.windows(2) {
            assert!(pair[1].start_sec > pair[0].end_sec);
            assert!(pair[1].start_sec - pair[0].end_sec > MERGE_GAP_SEC);
        }
    }

    // -------------------------------------------------------------------------
    // Clip Lookup
    // -------------------------------------------------------------------------

    #[test]
    fn test_find_clip_index() {
        let clips = vec![Clip::new(10.0, 20.0), Clip::new(30.0, 40.0)];

        assert_eq!(find_clip_index(&clips, 15.0), Some(0));
        assert_eq!(find_clip_index(&clips, 30.0), Some(1));
        assert_eq!(find_clip_index(&clips, 25.0), None);
    }

    #[test]
    fn test_clip_containment_includes_end() {
        let clip = Clip::new(10.0, 20.0);

        assert!(clip.contains(10.0));
        assert!(clip.contains(20.0));
        assert!(!clip.contains(20.001));
    }

    // -------------------------------------------------------------------------
    // Suggested Highlights
    // -------------------------------------------------------------------------

    #[test]
    fn test_suggested_selection_inclusive_containment() {
        let sections = sections_from(vec![
            Sentence::new("s1", "a", 0.0, 5.0),
            Sentence::new("s2", "b", 5.0, 12.0),
            Sentence::new("s3", "c", 12.0, 18.0),
        ]);
        // Range covers s2 exactly and s3 partially
        let ranges = vec![TimeRange::new(5.0, 13.0)];

        let selection = suggested_selection(&sections, &ranges);

        assert!(selection.contains("s2"));
        assert!(!selection.contains("s1"));
        assert!(!selection.contains("s3")); // Partial overlap is not containment
    }

    #[test]
    fn test_suggested_selection_multiple_ranges() {
        let sections = sections_from(vec![
            Sentence::new("s1", "a", 0.0, 5.0),
            Sentence::new("s2", "b", 30.0, 36.0),
        ]);
        let ranges = vec![TimeRange::new(0.0, 5.0), TimeRange::new(29.0, 40.0)];

        let selection = suggested_selection(&sections, &ranges);

        assert_eq!(selection.len(), 2);
    }
}
