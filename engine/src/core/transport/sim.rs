//! Simulated Media Element
//!
//! A deterministic, headless implementation of [`MediaElement`] backed by a
//! simple media clock. The element half is handed to the transport; the
//! [`SimHandle`] half stays with the driver (CLI simulation, tests) and
//! advances the clock with `tick`, mimicking the platform's decode loop.

use std::sync::{Arc, Mutex};

use super::element::{MediaElement, MediaEvent};
use crate::core::TimeSec;

#[derive(Debug, Default)]
struct SimState {
    source: Option<String>,
    current_sec: TimeSec,
    duration_sec: TimeSec,
    paused: bool,
    native_hls: bool,
    events: Vec<MediaEvent>,
}

impl SimState {
    fn new(native_hls: bool) -> Self {
        Self {
            paused: true,
            native_hls,
            ..Self::default()
        }
    }
}

// =============================================================================
// Simulated Element
// =============================================================================

/// Media element half of the simulator; give this to the transport
pub struct SimulatedMediaElement {
    state: Arc<Mutex<SimState>>,
}

impl SimulatedMediaElement {
    /// Creates an element without native HLS support, plus its driving handle
    pub fn new() -> (Self, SimHandle) {
        Self::create(false)
    }

    /// Creates an element that reports native HLS support
    pub fn with_native_hls() -> (Self, SimHandle) {
        Self::create(true)
    }

    fn create(native_hls: bool) -> (Self, SimHandle) {
        let state = Arc::new(Mutex::new(SimState::new(native_hls)));
        (
            Self {
                state: Arc::clone(&state),
            },
            SimHandle { state },
        )
    }
}

impl MediaElement for SimulatedMediaElement {
    fn current_sec(&self) -> TimeSec {
        self.state.lock().unwrap().current_sec
    }

    fn set_current_sec(&mut self, time_sec: TimeSec) {
        let mut state = self.state.lock().unwrap();
        let clamped = if state.duration_sec > 0.0 {
            time_sec.clamp(0.0, state.duration_sec)
        } else {
            time_sec.max(0.0)
        };
        state.current_sec = clamped;
        state.events.push(MediaEvent::TimeUpdate {
            time_sec: clamped,
        });
    }

    fn duration_sec(&self) -> TimeSec {
        self.state.lock().unwrap().duration_sec
    }

    fn paused(&self) -> bool {
        self.state.lock().unwrap().paused
    }

    fn play(&mut self) {
        let mut state = self.state.lock().unwrap();
        if state.source.is_none() {
            return;
        }
        if state.paused {
            state.paused = false;
            state.events.push(MediaEvent::Play);
        }
    }

    fn pause(&mut self) {
        let mut state = self.state.lock().unwrap();
        if !state.paused {
            state.paused = true;
            state.events.push(MediaEvent::Pause);
        }
    }

    fn set_source(&mut self, url: &str) {
        let mut state = self.state.lock().unwrap();
        state.source = Some(url.to_string());
        state.current_sec = 0.0;
        state.duration_sec = 0.0;
        state.paused = true;
        state.events.push(MediaEvent::LoadStart);
    }

    fn clear_source(&mut self) {
        let mut state = self.state.lock().unwrap();
        state.source = None;
        state.current_sec = 0.0;
        state.duration_sec = 0.0;
        state.paused = true;
    }

    fn supports_native_hls(&self) -> bool {
        self.state.lock().unwrap().native_hls
    }

    fn take_events(&mut self) -> Vec<MediaEvent> {
        std::mem::take(&mut self.state.lock().unwrap().events)
    }
}

// =============================================================================
// Simulation Handle
// =============================================================================

/// Driver half of the simulator: advances the media clock and inspects state
#[derive(Clone)]
pub struct SimHandle {
    state: Arc<Mutex<SimState>>,
}

impl SimHandle {
    /// Completes loading: duration becomes known and playback may begin
    pub fn finish_loading(&self, duration_sec: TimeSec) {
        let mut state = self.state.lock().unwrap();
        state.duration_sec = duration_sec;
        state
            .events
            .push(MediaEvent::DurationChange { duration_sec });
        state.events.push(MediaEvent::CanPlay);
    }

    /// Reports buffering progress for a progressive source
    pub fn buffer_to(&self, buffered_end_sec: TimeSec) {
        self.state
            .lock()
            .unwrap()
            .events
            .push(MediaEvent::Progress { buffered_end_sec });
    }

    /// Advances the media clock by `dt_sec` while playing.
    ///
    /// Pauses at the end of the media, as a real element would.
    pub fn tick(&self, dt_sec: TimeSec) {
        let mut state = self.state.lock().unwrap();
        if state.paused || state.source.is_none() {
            return;
        }

        let mut next = state.current_sec + dt_sec;
        let mut ended = false;
        if state.duration_sec > 0.0 && next >= state.duration_sec {
            next = state.duration_sec;
            ended = true;
        }

        state.current_sec = next;
        state.events.push(MediaEvent::TimeUpdate { time_sec: next });

        if ended {
            state.paused = true;
            state.events.push(MediaEvent::Pause);
        }
    }

    /// Current playback position
    pub fn current_sec(&self) -> TimeSec {
        self.state.lock().unwrap().current_sec
    }

    /// Whether the element is paused
    pub fn paused(&self) -> bool {
        self.state.lock().unwrap().paused
    }

    /// The URL assigned directly to the element, if any
    pub fn source(&self) -> Option<String> {
        self.state.lock().unwrap().source.clone()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_requires_source() {
        let (mut element, handle) = SimulatedMediaElement::new();

        element.play();
        assert!(handle.paused());

        element.set_source("demo.mp4");
        element.play();
        assert!(!handle.paused());
    }

    #[test]
    fn test_tick_advances_and_ends() {
        let (mut element, handle) = SimulatedMediaElement::new();
        element.set_source("demo.mp4");
        handle.finish_loading(1.0);
        element.play();

        handle.tick(0.4);
        assert_eq!(handle.current_sec(), 0.4);

        handle.tick(0.7);
        assert_eq!(handle.current_sec(), 1.0);
        assert!(handle.paused());
    }

    #[test]
    fn test_seek_clamps_to_duration() {
        let (mut element, handle) = SimulatedMediaElement::new();
        element.set_source("demo.mp4");
        handle.finish_loading(10.0);

        element.set_current_sec(25.0);
        assert_eq!(element.current_sec(), 10.0);

        element.set_current_sec(-5.0);
        assert_eq!(element.current_sec(), 0.0);
    }

    #[test]
    fn test_event_queue_drains() {
        let (mut element, handle) = SimulatedMediaElement::new();
        element.set_source("demo.mp4");
        handle.finish_loading(10.0);
        element.play();

        let events = element.take_events();
        assert_eq!(
            events,
            vec![
                MediaEvent::LoadStart,
                MediaEvent::DurationChange { duration_sec: 10.0 },
                MediaEvent::CanPlay,
                MediaEvent::Play,
            ]
        );
        assert!(element.take_events().is_empty());
    }
}
