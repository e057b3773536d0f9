//! Highlight Export
//!
//! Turns the current selection into printable time ranges. No media is
//! rendered; export is a textual summary of what would be cut.

use serde::Serialize;

use crate::core::transcript::{Section, SelectionSet};
use crate::core::{format_timestamp, SentenceId, TimeSec};

/// One selected sentence in export order
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEntry {
    /// Sentence ID
    pub id: SentenceId,
    /// Sentence text
    pub text: String,
    /// Start time in seconds
    pub start_sec: TimeSec,
    /// End time in seconds
    pub end_sec: TimeSec,
}

/// Collects the selected sentences across all sections, sorted by start time
pub fn selected_highlights(selected: &SelectionSet, sections: &[Section]) -> Vec<ExportEntry> {
    let mut entries: Vec<ExportEntry> = sections
        .iter()
        .flat_map(|section| section.sentences.iter())
        .filter(|sentence| selected.contains(&sentence.id))
        .map(|sentence| ExportEntry {
            id: sentence.id.clone(),
            text: sentence.text.clone(),
            start_sec: sentence.start_sec,
            end_sec: sentence.end_sec,
        })
        .collect();

    entries.sort_by(|a, b| {
        a.start_sec
            .partial_cmp(&b.start_sec)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    entries
}

/// Formats export entries as one `M:SS - M:SS` range per line
pub fn format_time_ranges(entries: &[ExportEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{} - {}",
                format_timestamp(entry.start_sec),
                format_timestamp(entry.end_sec)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transcript::Sentence;

    fn sections() -> Vec<Section> {
        vec![
            Section::new("sec1", "Intro", 0.0, 20.0)
                .with_sentence(Sentence::new("s1", "One", 0.0, 5.0))
                .with_sentence(Sentence::new("s2", "Two", 5.0, 12.0)),
            Section::new("sec2", "Main", 30.0, 50.0)
                .with_sentence(Sentence::new("s4", "Four", 30.0, 36.0)),
        ]
    }

    #[test]
    fn test_selected_highlights_sorted_by_start() {
        let selection = SelectionSet::from_ids(["s4", "s1"]);

        let entries = selected_highlights(&selection, &sections());

        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s4"]);
    }

    #[test]
    fn test_format_time_ranges() {
        let selection = SelectionSet::from_ids(["s2", "s4"]);
        let entries = selected_highlights(&selection, &sections());

        assert_eq!(format_time_ranges(&entries), "0:05 - 0:12\n0:30 - 0:36");
    }

    #[test]
    fn test_empty_selection_exports_nothing() {
        let entries = selected_highlights(&SelectionSet::new(), &sections());

        assert!(entries.is_empty());
        assert_eq!(format_time_ranges(&entries), "");
    }
}
