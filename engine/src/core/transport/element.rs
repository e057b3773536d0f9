//! Media Element Abstraction
//!
//! The handle over the platform's actual playable media resource, as the
//! transport sees it: a current position, a duration, a paused flag, and a
//! drained queue of playback events. Decode and network I/O live entirely
//! behind this trait; the engine never blocks on them.

use crate::core::TimeSec;

// =============================================================================
// Media Events
// =============================================================================

/// Events raised by the underlying media element, drained by the transport
#[derive(Clone, Debug, PartialEq)]
pub enum MediaEvent {
    /// Playhead advanced (high frequency)
    TimeUpdate { time_sec: TimeSec },
    /// Media duration became known or changed
    DurationChange { duration_sec: TimeSec },
    /// Playback started
    Play,
    /// Playback paused
    Pause,
    /// A new source started loading
    LoadStart,
    /// Enough data buffered to begin playback
    CanPlay,
    /// Buffered range grew (progressive sources)
    Progress { buffered_end_sec: TimeSec },
}

// =============================================================================
// Media Element Trait
// =============================================================================

/// A playable media resource handle.
///
/// Mirrors the platform media element surface: readable/writable position,
/// readable duration and paused state, play/pause, and an event queue the
/// owner drains once per pump.
pub trait MediaElement: Send {
    /// Current playback position in seconds
    fn current_sec(&self) -> TimeSec;

    /// Moves the playback position
    fn set_current_sec(&mut self, time_sec: TimeSec);

    /// Media duration in seconds (0.0 until known)
    fn duration_sec(&self) -> TimeSec;

    /// Whether playback is currently paused
    fn paused(&self) -> bool;

    /// Starts playback
    fn play(&mut self);

    /// Pauses playback
    fn pause(&mut self);

    /// Assigns a source URL directly to the element
    fn set_source(&mut self, url: &str);

    /// Removes the current source and resets position
    fn clear_source(&mut self);

    /// Whether the element can play HLS manifests without a client library
    fn supports_native_hls(&self) -> bool {
        false
    }

    /// Drains all events raised since the last call
    fn take_events(&mut self) -> Vec<MediaEvent>;
}
