//! Playback Controller
//!
//! Sole owner of the media transport and of [`PlaybackState`]. Every
//! operation is a single synchronous state transition; transport events are
//! consumed through [`PlaybackController::pump`], which keeps the mirrored
//! state, the active clip index, and the transport position mutually
//! consistent.

use tracing::debug;

use super::{ControllerState, PlaybackState, TimestampRequest};
use crate::core::clips::{find_clip_index, Clip};
use crate::core::transport::{MediaTransport, TransportEvent};
use crate::core::TimeSec;

/// Clip-constrained playback state machine
pub struct PlaybackController {
    transport: MediaTransport,
    clips: Vec<Clip>,
    state: ControllerState,
    playback: PlaybackState,
    subtitles_enabled: bool,
}

impl PlaybackController {
    /// Creates a controller owning the given transport, with no clips (idle)
    pub fn new(transport: MediaTransport) -> Self {
        Self {
            transport,
            clips: Vec::new(),
            state: ControllerState::Idle,
            playback: PlaybackState::default(),
            subtitles_enabled: true,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Current controller state
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// The active clip list
    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    /// Mirrored playback state
    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    /// The owned transport
    pub fn transport(&self) -> &MediaTransport {
        &self.transport
    }

    /// Mutable access to the owned transport (attach/detach)
    pub fn transport_mut(&mut self) -> &mut MediaTransport {
        &mut self.transport
    }

    /// Whether subtitle display is enabled
    pub fn subtitles_enabled(&self) -> bool {
        self.subtitles_enabled
    }

    // -------------------------------------------------------------------------
    // Clip List
    // -------------------------------------------------------------------------

    /// Replaces the clip list and re-validates the active index and the
    /// transport position against it.
    ///
    /// This is the explicit post-mutation reconciliation step: if the
    /// playhead no longer falls inside any clip, it snaps to clip 0's start;
    /// if it does, the active index follows it. An empty list drops the
    /// controller back to unconstrained idle playback.
    pub fn set_clips(&mut self, clips: Vec<Clip>) {
        let was_playing = match self.state {
            ControllerState::PlayingClip(_) => true,
            // Entering constrained mode mid-play keeps the transport rolling
            ControllerState::Idle => self.transport.is_attached() && !self.transport.paused(),
            ControllerState::StoppedAtClip(_) => false,
        };

        self.clips = clips;

        if self.clips.is_empty() {
            self.set_state(ControllerState::Idle);
            return;
        }

        let position = self.transport.current_sec();
        let index = match find_clip_index(&self.clips, position) {
            Some(i) => i,
            None => {
                debug!(
                    "Playhead {:.3}s outside all clips after rebuild, snapping to clip 0",
                    position
                );
                self.transport.seek(self.clips[0].start_sec);
                0
            }
        };

        self.set_state(if was_playing {
            ControllerState::PlayingClip(index)
        } else {
            ControllerState::StoppedAtClip(index)
        });
    }

    // -------------------------------------------------------------------------
    // Play / Pause
    // -------------------------------------------------------------------------

    /// Starts or resumes playback.
    ///
    /// From a stopped clip: resumes in place when the playhead is already
    /// inside the clip, otherwise rewinds to the clip's start first.
    pub fn play(&mut self) {
        match self.state {
            ControllerState::Idle => self.transport.play(),
            ControllerState::StoppedAtClip(i) => {
                if !self.clips[i].contains(self.transport.current_sec()) {
                    self.transport.seek(self.clips[i].start_sec);
                }
                self.transport.play();
                self.set_state(ControllerState::PlayingClip(i));
            }
            ControllerState::PlayingClip(_) => {}
        }
    }

    /// Pauses playback
    pub fn pause(&mut self) {
        match self.state {
            ControllerState::Idle => self.transport.pause(),
            ControllerState::PlayingClip(i) => {
                self.transport.pause();
                self.set_state(ControllerState::StoppedAtClip(i));
            }
            ControllerState::StoppedAtClip(_) => {}
        }
    }

    /// Toggles between play and pause based on the transport's paused flag
    pub fn toggle_play_pause(&mut self) {
        if self.transport.paused() {
            self.play();
        } else {
            self.pause();
        }
    }

    // -------------------------------------------------------------------------
    // Clip Navigation
    // -------------------------------------------------------------------------

    /// Jumps to the next clip's start, wrapping past the last clip.
    ///
    /// No-op with one clip or fewer, or in idle mode.
    pub fn skip_forward(&mut self) {
        self.skip_to(|i, n| (i + 1) % n);
    }

    /// Jumps to the previous clip's start, wrapping before the first clip
    pub fn skip_backward(&mut self) {
        self.skip_to(|i, n| (i + n - 1) % n);
    }

    fn skip_to(&mut self, step: impl Fn(usize, usize) -> usize) {
        let n = self.clips.len();
        if n <= 1 {
            return;
        }
        let Some(i) = self.state.clip_index() else {
            return;
        };

        let next = step(i, n);
        self.transport.seek(self.clips[next].start_sec);

        if self.state.is_playing() {
            self.transport.play();
            self.set_state(ControllerState::PlayingClip(next));
        } else {
            self.set_state(ControllerState::StoppedAtClip(next));
        }
    }

    // -------------------------------------------------------------------------
    // Seeking
    // -------------------------------------------------------------------------

    /// Seeks to a media time, constrained to the clip list.
    ///
    /// A target inside a clip activates that clip and lands exactly there;
    /// a target in a gap snaps to clip 0's start. The transport is never
    /// left idling outside a clip while clips are active. In idle mode the
    /// target is simply clamped to the media range.
    pub fn seek_to(&mut self, time_sec: TimeSec) {
        if self.clips.is_empty() {
            let duration = self.transport.duration_sec();
            let clamped = if duration > 0.0 {
                time_sec.clamp(0.0, duration)
            } else {
                time_sec.max(0.0)
            };
            self.transport.seek(clamped);
            return;
        }

        let (index, target) = match find_clip_index(&self.clips, time_sec) {
            Some(i) => (i, time_sec),
            None => (0, self.clips[0].start_sec),
        };

        self.transport.seek(target);
        self.set_state(if self.state.is_playing() {
            ControllerState::PlayingClip(index)
        } else {
            ControllerState::StoppedAtClip(index)
        });
    }

    /// Handles a one-shot timestamp request: seek, force playback if the
    /// transport reports paused, then acknowledge so the request cannot
    /// replay.
    pub fn jump_to_timestamp(&mut self, request: TimestampRequest) {
        self.seek_to(request.target_sec);
        if self.transport.paused() {
            self.play();
        }
        request.acknowledge();
    }

    // -------------------------------------------------------------------------
    // Subtitles
    // -------------------------------------------------------------------------

    /// Flips subtitle display; orthogonal to playback state
    pub fn toggle_subtitles(&mut self) -> bool {
        self.subtitles_enabled = !self.subtitles_enabled;
        self.subtitles_enabled
    }

    // -------------------------------------------------------------------------
    // Event Pump
    // -------------------------------------------------------------------------

    /// Drains transport events, applies boundary transitions, and mirrors
    /// transport state into [`PlaybackState`]. Call once per host tick.
    pub fn pump(&mut self) {
        for event in self.transport.poll_events() {
            self.apply_event(event);
        }
        if let Some(event) = self.transport.check_stall() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: TransportEvent) {
        match event {
            TransportEvent::TimeUpdate { time_sec } => {
                self.playback.current_sec = time_sec;
                self.enforce_clip_boundary(time_sec);
            }
            TransportEvent::DurationKnown { duration_sec } => {
                self.playback.duration_sec = duration_sec;
            }
            TransportEvent::PlayStarted => {
                self.playback.is_playing = true;
                if let ControllerState::StoppedAtClip(i) = self.state {
                    self.set_state(ControllerState::PlayingClip(i));
                }
            }
            TransportEvent::Paused => {
                self.playback.is_playing = false;
                if let ControllerState::PlayingClip(i) = self.state {
                    self.set_state(ControllerState::StoppedAtClip(i));
                }
            }
            TransportEvent::LoadStarted => self.playback.is_loading = true,
            TransportEvent::CanPlay | TransportEvent::Stalled => {
                self.playback.is_loading = false;
            }
            TransportEvent::BufferedRange { .. } => {}
        }
    }

    /// Advances past a finished clip, or completes the sequence: after the
    /// last clip the transport pauses and rewinds to clip 0's start.
    fn enforce_clip_boundary(&mut self, time_sec: TimeSec) {
        let ControllerState::PlayingClip(i) = self.state else {
            return;
        };
        if time_sec < self.clips[i].end_sec {
            return;
        }

        if i + 1 < self.clips.len() {
            self.transport.seek(self.clips[i + 1].start_sec);
            self.set_state(ControllerState::PlayingClip(i + 1));
        } else {
            self.transport.pause();
            self.transport.seek(self.clips[0].start_sec);
            self.set_state(ControllerState::StoppedAtClip(0));
            self.playback.is_playing = false;
        }
    }

    fn set_state(&mut self, next: ControllerState) {
        self.state = next;
        self.playback.active_clip_index = next.clip_index().unwrap_or(0);
    }
}

// =============================================================================
// Tests
// =============================================================================
