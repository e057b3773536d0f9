//! Highlight Selection
//!
//! The user-controlled set of sentence IDs included in clip-constrained
//! playback. Mutated only through explicit toggle/clear/replace operations;
//! every mutation is followed by a full clip recomputation by the caller.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::SentenceId;

/// Deduplicated set of selected sentence IDs. Ordering carries no meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    ids: HashSet<SentenceId>,
}

impl SelectionSet {
    /// Creates an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a selection from an iterator of IDs
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SentenceId>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Toggles a sentence in or out of the selection.
    ///
    /// Returns true if the sentence is selected after the call.
    pub fn toggle(&mut self, sentence_id: &str) -> bool {
        if self.ids.remove(sentence_id) {
            false
        } else {
            self.ids.insert(sentence_id.to_string());
            true
        }
    }

    /// Adds a sentence to the selection
    pub fn insert(&mut self, sentence_id: &str) {
        self.ids.insert(sentence_id.to_string());
    }

    /// Removes all selected sentences
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Replaces the entire selection (full overwrite, not a merge)
    pub fn replace(&mut self, other: SelectionSet) {
        self.ids = other.ids;
    }

    /// Checks membership
    pub fn contains(&self, sentence_id: &str) -> bool {
        self.ids.contains(sentence_id)
    }

    /// Returns the number of selected sentences
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if nothing is selected
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates the selected IDs (unordered)
    pub fn iter(&self) -> impl Iterator<Item = &SentenceId> {
        self.ids.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut selection = SelectionSet::new();

        assert!(selection.toggle("s1"));
        assert!(selection.contains("s1"));
        assert_eq!(selection.len(), 1);

        assert!(!selection.toggle("s1"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_deduplicates() {
        let mut selection = SelectionSet::new();
        selection.insert("s1");
        selection.insert("s1");

        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_replace_is_full_overwrite() {
        let mut selection = SelectionSet::from_ids(["s1", "s2"]);
        selection.replace(SelectionSet::from_ids(["s9"]));

        assert_eq!(selection.len(), 1);
        assert!(selection.contains("s9"));
        assert!(!selection.contains("s1"));
    }

    #[test]
    fn test_clear() {
        let mut selection = SelectionSet::from_ids(["s1", "s2", "s3"]);
        selection.clear();

        assert!(selection.is_empty());
    }
}
