//! Reelmark Core Library
//!
//! Highlight-selection and clip-constrained playback engine: a transcript
//! with candidate highlight sentences arrives from an asynchronous job, the
//! user selects a subset, and playback is restricted to the merged time
//! ranges of that selection.
//!
//! [`HighlightSession`] is the top-level façade wiring the pieces together;
//! the building blocks live under [`core`].

pub mod core;

use tokio::sync::oneshot;
use tracing::info;

use crate::core::captions::{active_caption, project_captions, Caption};
use crate::core::clips::{build_clips, suggested_selection, Clip};
use crate::core::jobs::TranscriptResult;
use crate::core::playback::{PlaybackController, PlaybackState, TimestampSlot};
use crate::core::transcript::{SelectionSet, TranscriptData};
use crate::core::transport::{MediaElement, MediaTransport};
use crate::core::{export, TimeRange, TimeSec};

// =============================================================================
// Highlight Session
// =============================================================================

/// One editing session: transcript, selection, derived clips, captions, and
/// the clip-constrained playback controller over a single media transport.
///
/// Every selection mutation rebuilds the clip list from scratch and
/// re-validates playback against it; clips are never patched in place.
pub struct HighlightSession {
    transcript: Option<TranscriptData>,
    suggested: Vec<TimeRange>,
    selection: SelectionSet,
    captions: Vec<Caption>,
    controller: PlaybackController,
    timestamps: TimestampSlot,
}

impl HighlightSession {
    /// Creates a session over a media element with default transport config
    pub fn new(element: Box<dyn MediaElement>) -> Self {
        Self::with_transport(MediaTransport::new(element))
    }

    /// Creates a session over a pre-configured transport
    pub fn with_transport(transport: MediaTransport) -> Self {
        Self {
            transcript: None,
            suggested: Vec::new(),
            selection: SelectionSet::new(),
            captions: Vec::new(),
            controller: PlaybackController::new(transport),
            timestamps: TimestampSlot::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Transcript Lifecycle
    // -------------------------------------------------------------------------

    /// Installs a fetched transcript result: stores the transcript, projects
    /// captions, attaches the media source, and starts with an empty
    /// selection.
    pub fn load_result(&mut self, result: TranscriptResult) {
        info!(
            "Loading transcript: {} sections, media {}",
            result.sections.len(),
            result.media_url
        );

        self.captions = project_captions(&result.sections);
        self.suggested = result.suggested_highlights;
        self.selection.clear();
        self.controller.transport_mut().attach(&result.media_url);
        self.transcript = Some(TranscriptData::new(result.sections, result.duration_sec));
        self.rebuild_clips();
    }

    /// Resets the session: detaches the media source and drops all
    /// transcript-derived state
    pub fn reset(&mut self) {
        self.transcript = None;
        self.suggested.clear();
        self.selection.clear();
        self.captions.clear();
        self.timestamps = TimestampSlot::new();
        self.controller.transport_mut().detach();
        self.rebuild_clips();
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Toggles a sentence in the highlight selection.
    ///
    /// Returns true if the sentence is selected after the call.
    pub fn toggle_sentence(&mut self, sentence_id: &str) -> bool {
        let selected = self.selection.toggle(sentence_id);
        self.rebuild_clips();
        selected
    }

    /// Clears the highlight selection
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.rebuild_clips();
    }

    /// Replaces the selection with the source's suggested highlights
    /// (full overwrite, not a merge)
    pub fn apply_suggested(&mut self) {
        let sections = match &self.transcript {
            Some(t) => &t.sections,
            None => return,
        };
        self.selection
            .replace(suggested_selection(sections, &self.suggested));
        self.rebuild_clips();
    }

    /// Recomputes clips from the current selection and re-validates playback
    /// against the new list
    fn rebuild_clips(&mut self) {
        let clips = match &self.transcript {
            Some(t) => build_clips(&self.selection, &t.sections),
            None => Vec::new(),
        };
        self.controller.set_clips(clips);
    }

    // -------------------------------------------------------------------------
    // Timestamp Requests
    // -------------------------------------------------------------------------

    /// Posts a one-shot jump request (a transcript line click). The returned
    /// receiver resolves once the request has been handled and cleared.
    pub fn request_timestamp(&mut self, target_sec: TimeSec) -> oneshot::Receiver<()> {
        self.timestamps.post(target_sec)
    }

    // -------------------------------------------------------------------------
    // Event Pump
    // -------------------------------------------------------------------------

    /// One host tick: consumes any pending timestamp request, then drains
    /// transport events through the controller
    pub fn pump(&mut self) {
        if let Some(request) = self.timestamps.take() {
            self.controller.jump_to_timestamp(request);
        }
        self.controller.pump();
    }

    // -------------------------------------------------------------------------
    // Projections
    // -------------------------------------------------------------------------

    /// The caption under the playhead, when subtitles are enabled
    pub fn active_caption(&self) -> Option<&str> {
        if !self.controller.subtitles_enabled() {
            return None;
        }
        active_caption(self.controller.playback().current_sec, &self.captions)
            .map(|c| c.text.as_str())
    }

    /// Selected highlight ranges as printable `M:SS - M:SS` lines
    pub fn export_ranges(&self) -> String {
        let sections = match &self.transcript {
            Some(t) => t.sections.as_slice(),
            None => return String::new(),
        };
        export::format_time_ranges(&export::selected_highlights(&self.selection, sections))
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The loaded transcript, if any
    pub fn transcript(&self) -> Option<&TranscriptData> {
        self.transcript.as_ref()
    }

    /// The current highlight selection
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// The derived clip list
    pub fn clips(&self) -> &[Clip] {
        self.controller.clips()
    }

    /// The projected caption list
    pub fn captions(&self) -> &[Caption] {
        &self.captions
    }

    /// Mirrored playback state
    pub fn playback(&self) -> &PlaybackState {
        self.controller.playback()
    }

    /// The playback controller
    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    /// Mutable access to the playback controller
    pub fn controller_mut(&mut self) -> &mut PlaybackController {
        &mut self.controller
    }
}

// =============================================================================
// Tests
// =============================================================================
