//! Clip-Constrained Playback Module
//!
//! The state machine that drives the media transport through the ordered
//! clip sequence: sequencing, wrap-around skips, boundary transitions, and
//! seek snapping. With no clips selected it degrades to unconstrained
//! full-range playback.

mod controller;
mod request;

pub use controller::*;
pub use request::*;

use serde::Serialize;

use crate::core::TimeSec;

// =============================================================================
// Controller State
// =============================================================================

/// Playback controller state.
///
/// `Idle` means no clips are selected and the transport plays unconstrained;
/// the other two carry the active clip index. The controller is in `Idle`
/// exactly when its clip list is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerState {
    /// No clips: full-range playback without boundary enforcement
    Idle,
    /// Paused, positioned at (or assigned to) clip `i`
    StoppedAtClip(usize),
    /// Playing within clip `i`
    PlayingClip(usize),
}

impl ControllerState {
    /// The active clip index, if clips are active
    pub fn clip_index(&self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::StoppedAtClip(i) | Self::PlayingClip(i) => Some(*i),
        }
    }

    /// True while in the playing state
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::PlayingClip(_))
    }
}

// =============================================================================
// Playback State Mirror
// =============================================================================

/// Snapshot of playback state for observers.
///
/// Owned exclusively by the controller; the transport remains the source of
/// truth for position, duration, playing, and loading, mirrored here on
/// every transport event.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    /// Current playhead position in seconds
    pub current_sec: TimeSec,
    /// Media duration in seconds (0.0 until known)
    pub duration_sec: TimeSec,
    /// Whether the transport is playing
    pub is_playing: bool,
    /// Index of the active clip (0 when idle)
    pub active_clip_index: usize,
    /// Whether the source is still loading
    pub is_loading: bool,
}
