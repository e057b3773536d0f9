//! Interactive Scrub Surface Module
//!
//! Translates pointer input over a fixed-width track into candidate seek
//! times, validates them against the active clip list, and either commits a
//! seek through the controller or reports a denied position. The surface
//! owns its track geometry and receives the controller explicitly; it never
//! reaches into ambient state.

use serde::Serialize;
use tracing::warn;

use crate::core::clips::find_clip_index;
use crate::core::playback::PlaybackController;
use crate::core::{format_timestamp, TimeSec};

// =============================================================================
// Hover Preview
// =============================================================================

/// Informational time preview shown at the pointer's horizontal offset.
///
/// Computed regardless of clip membership; hovering never implies a seek.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverPreview {
    /// Pointer offset from the track's left edge, in pixels
    pub offset_px: f64,
    /// Resolved media time in seconds
    pub time_sec: TimeSec,
    /// Formatted `M:SS` label
    pub label: String,
}

// =============================================================================
// Scrub Surface
// =============================================================================

/// Pointer-driven scrub surface over the clip-constrained controller
pub struct ScrubSurface {
    track_width_px: f64,
    dragging: bool,
    hover: Option<HoverPreview>,
}

impl ScrubSurface {
    /// Creates a surface for a track of the given pixel width
    pub fn new(track_width_px: f64) -> Self {
        let width = if track_width_px > 0.0 {
            track_width_px
        } else {
            warn!(
                "ScrubSurface created with non-positive width {}, defaulting to 1",
                track_width_px
            );
            1.0
        };
        Self {
            track_width_px: width,
            dragging: false,
            hover: None,
        }
    }

    /// Updates the track geometry (layout change)
    pub fn set_track_width(&mut self, track_width_px: f64) {
        if track_width_px > 0.0 {
            self.track_width_px = track_width_px;
        }
    }

    /// Resolves a pointer offset to a media time by linear interpolation,
    /// clamped to `[0, duration]`
    pub fn resolve_time(&self, pointer_x: f64, duration_sec: TimeSec) -> TimeSec {
        let ratio = (pointer_x / self.track_width_px).clamp(0.0, 1.0);
        ratio * duration_sec
    }

    /// Whether a drag session is active
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The current hover preview, if the pointer is over the track
    pub fn hover(&self) -> Option<&HoverPreview> {
        self.hover.as_ref()
    }

    // -------------------------------------------------------------------------
    // Pointer Input
    // -------------------------------------------------------------------------

    /// Pointer press: begins a drag session and commits an immediate seek if
    /// the resolved time falls inside a clip. Returns true if the seek was
    /// committed, false if the position was denied.
    pub fn press(&mut self, pointer_x: f64, controller: &mut PlaybackController) -> bool {
        let duration = controller.playback().duration_sec;
        if duration <= 0.0 {
            return false;
        }

        let time = self.resolve_time(pointer_x, duration);
        if find_clip_index(controller.clips(), time).is_none() {
            return false;
        }

        self.dragging = true;
        controller.seek_to(time);
        true
    }

    /// Pointer move: always refreshes the hover preview; while dragging,
    /// commits updated seeks only for positions inside a clip. Positions in
    /// a gap are ignored and the playhead stays at the last valid seek.
    pub fn pointer_move(&mut self, pointer_x: f64, controller: &mut PlaybackController) -> bool {
        let duration = controller.playback().duration_sec;
        if duration <= 0.0 {
            return false;
        }

        let time = self.resolve_time(pointer_x, duration);
        self.hover = Some(HoverPreview {
            offset_px: pointer_x.clamp(0.0, self.track_width_px),
            time_sec: time,
            label: format_timestamp(time),
        });

        if self.dragging && find_clip_index(controller.clips(), time).is_some() {
            controller.seek_to(time);
            return true;
        }
        false
    }

    /// Pointer release: ends the drag session. No snap-back; the playhead
    /// remains wherever the last valid in-clip seek landed.
    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// Pointer leave: clears the hover preview (and any drag session)
    pub fn pointer_leave(&mut self) {
        self.hover = None;
        self.dragging = false;
    }

    /// Click (press and release without drag): a single validated seek
    pub fn click(&mut self, pointer_x: f64, controller: &mut PlaybackController) -> bool {
        let committed = self.press(pointer_x, controller);
        self.release();
        committed
    }
}

// =============================================================================
// Tests
// =============================================================================
