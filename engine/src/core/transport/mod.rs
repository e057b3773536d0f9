//! Media Transport Module
//!
//! Owns the single playable media element behind one playback session.
//! Abstracts over progressive URLs and segmented (HLS) manifests, selecting
//! an adaptive streaming client only when the source requires one, and
//! translates raw element events into transport events for the controller.
//!
//! Adaptive initialization failure is absorbed here: it is logged and
//! surfaces as `is_loading == false` with no playable content, never as a
//! hard error to the caller.

mod element;
mod hls;
mod sim;

pub use element::*;
pub use hls::*;
pub use sim::*;

use std::time::Instant;

use tracing::{error, warn};

use crate::core::TimeSec;

// =============================================================================
// Transport Events
// =============================================================================

/// Events emitted by the transport, consumed by the playback controller
#[derive(Clone, Debug, PartialEq)]
pub enum TransportEvent {
    /// Playhead advanced
    TimeUpdate { time_sec: TimeSec },
    /// Media duration became known
    DurationKnown { duration_sec: TimeSec },
    /// Playback started
    PlayStarted,
    /// Playback paused
    Paused,
    /// A new source began loading
    LoadStarted,
    /// Loading completed; playback is possible
    CanPlay,
    /// Buffered range grew (progressive sources only)
    BufferedRange { end_sec: TimeSec },
    /// The source never became playable within the stall timeout
    Stalled,
}

// =============================================================================
// Configuration
// =============================================================================

/// Transport configuration
#[derive(Clone, Debug)]
pub struct TransportConfig {
    /// Seconds after attach before a source that never reached can-play is
    /// declared stalled
    pub stall_timeout_sec: f64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            stall_timeout_sec: 15.0,
        }
    }
}

// =============================================================================
// Media Transport
// =============================================================================

/// Wraps the playable media element and its optional adaptive client.
///
/// Exactly one transport backs one playback session; the playback
/// controller is its sole owner.
pub struct MediaTransport {
    element: Box<dyn MediaElement>,
    adaptive_factory: Option<Box<dyn AdaptiveStreamerFactory>>,
    adaptive: Option<Box<dyn AdaptiveStreamer>>,
    source_url: Option<String>,
    is_loading: bool,
    stalled: bool,
    attached_at: Option<Instant>,
    config: TransportConfig,
}

impl MediaTransport {
    /// Creates a transport over a media element
    pub fn new(element: Box<dyn MediaElement>) -> Self {
        Self {
            element,
            adaptive_factory: None,
            adaptive: None,
            source_url: None,
            is_loading: false,
            stalled: false,
            attached_at: None,
            config: TransportConfig::default(),
        }
    }

    /// Sets the transport configuration
    pub fn with_config(mut self, config: TransportConfig) -> Self {
        self.config = config;
        self
    }

    /// Installs the factory used to create adaptive streaming clients
    pub fn with_adaptive_factory(mut self, factory: Box<dyn AdaptiveStreamerFactory>) -> Self {
        self.adaptive_factory = Some(factory);
        self
    }

    // -------------------------------------------------------------------------
    // Attach / Detach
    // -------------------------------------------------------------------------

    /// Attaches a new source, tearing down any previous adaptive client
    /// first so two clients never drive the element concurrently.
    pub fn attach(&mut self, url: &str) {
        self.destroy_adaptive();

        self.source_url = Some(url.to_string());
        self.is_loading = true;
        self.stalled = false;
        self.attached_at = Some(Instant::now());

        if is_hls_url(url) {
            if self.element.supports_native_hls() {
                // Native support: hand the manifest straight to the element
                self.element.set_source(url);
            } else {
                self.init_adaptive(url);
            }
        } else {
            self.element.set_source(url);
        }
    }

    /// Detaches the current source and releases adaptive resources
    pub fn detach(&mut self) {
        self.destroy_adaptive();
        self.element.clear_source();
        self.source_url = None;
        self.is_loading = false;
        self.stalled = false;
        self.attached_at = None;
    }

    fn init_adaptive(&mut self, url: &str) {
        let Some(factory) = self.adaptive_factory.as_ref() else {
            error!("HLS source without an adaptive streaming client: {}", url);
            self.is_loading = false;
            return;
        };

        match factory.create() {
            Ok(mut client) => match client.load_source(url) {
                Ok(()) => self.adaptive = Some(client),
                Err(e) => {
                    error!("Adaptive streaming load failed: {}", e);
                    self.is_loading = false;
                }
            },
            Err(e) => {
                error!("Adaptive streaming initialization failed: {}", e);
                self.is_loading = false;
            }
        }
    }

    fn destroy_adaptive(&mut self) {
        if let Some(mut client) = self.adaptive.take() {
            client.destroy();
        }
    }

    // -------------------------------------------------------------------------
    // Playback Primitives
    // -------------------------------------------------------------------------

    /// Starts playback; no-op without an attached source
    pub fn play(&mut self) {
        if self.source_url.is_some() {
            self.element.play();
        }
    }

    /// Pauses playback; no-op without an attached source
    pub fn pause(&mut self) {
        if self.source_url.is_some() {
            self.element.pause();
        }
    }

    /// Moves the playhead; no-op without an attached source
    pub fn seek(&mut self, time_sec: TimeSec) {
        if self.source_url.is_some() {
            self.element.set_current_sec(time_sec);
        }
    }

    // -------------------------------------------------------------------------
    // State Accessors
    // -------------------------------------------------------------------------

    /// Current playback position
    pub fn current_sec(&self) -> TimeSec {
        self.element.current_sec()
    }

    /// Media duration (0.0 until known)
    pub fn duration_sec(&self) -> TimeSec {
        self.element.duration_sec()
    }

    /// Whether the element is paused
    pub fn paused(&self) -> bool {
        self.element.paused()
    }

    /// Whether a source is currently attached
    pub fn is_attached(&self) -> bool {
        self.source_url.is_some()
    }

    /// Whether the source is still loading
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether the source failed to become playable within the timeout
    pub fn is_stalled(&self) -> bool {
        self.stalled
    }

    /// The attached source URL, if any
    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Drains element events, updating loading state and mapping them into
    /// transport events
    pub fn poll_events(&mut self) -> Vec<TransportEvent> {
        let mut out = Vec::new();

        for event in self.element.take_events() {
            match event {
                MediaEvent::TimeUpdate { time_sec } => {
                    out.push(TransportEvent::TimeUpdate { time_sec });
                }
                MediaEvent::DurationChange { duration_sec } => {
                    out.push(TransportEvent::DurationKnown { duration_sec });
                }
                MediaEvent::Play => out.push(TransportEvent::PlayStarted),
                MediaEvent::Pause => out.push(TransportEvent::Paused),
                MediaEvent::LoadStart => {
                    self.is_loading = true;
                    out.push(TransportEvent::LoadStarted);
                }
                MediaEvent::CanPlay => {
                    self.is_loading = false;
                    self.stalled = false;
                    out.push(TransportEvent::CanPlay);
                }
                MediaEvent::Progress { buffered_end_sec } => {
                    // Buffered-range reporting only applies to progressive
                    // sources; adaptive clients manage their own buffers.
                    if self.adaptive.is_none() {
                        out.push(TransportEvent::BufferedRange {
                            end_sec: buffered_end_sec,
                        });
                    }
                }
            }
        }

        out
    }

    /// Declares the source stalled if it has been loading longer than the
    /// configured timeout without reaching can-play
    pub fn check_stall(&mut self) -> Option<TransportEvent> {
        if !self.is_loading {
            return None;
        }
        let attached_at = self.attached_at?;

        if attached_at.elapsed().as_secs_f64() >= self.config.stall_timeout_sec {
            warn!(
                "Source never became playable within {:.1}s: {:?}",
                self.config.stall_timeout_sec, self.source_url
            );
            self.is_loading = false;
            self.stalled = true;
            return Some(TransportEvent::Stalled);
        }

        None
    }
}

impl Drop for MediaTransport {
    fn drop(&mut self) {
        self.destroy_adaptive();
    }
}

// =============================================================================
// Tests
// =============================================================================
