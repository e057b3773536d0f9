//! End-to-end flow: transcription job → selection → clips → constrained
//! playback, driven through the public session façade.

use std::time::Duration;

use reelmark::core::clips::Clip;
use reelmark::core::jobs::{run_transcription, MockTranscriptSource, TranscriptResult};
use reelmark::core::playback::ControllerState;
use reelmark::core::transcript::{Section, Sentence};
use reelmark::core::transport::SimulatedMediaElement;
use reelmark::HighlightSession;

fn three_sentence_result() -> TranscriptResult {
    let intro = Section::new("sec1", "Intro", 0.0, 20.0)
        .with_sentence(Sentence::new("s1", "First sentence.", 0.0, 5.0))
        .with_sentence(Sentence::new("s2", "Second sentence.", 5.0, 12.0));
    let main = Section::new("sec2", "Main", 30.0, 40.0)
        .with_sentence(Sentence::new("s4", "Fourth sentence.", 30.0, 36.0));

    TranscriptResult {
        sections: vec![intro, main],
        suggested_highlights: vec![],
        media_url: "https://media.example.com/videos/flow/source.mp4".to_string(),
        duration_sec: 60.0,
    }
}

#[test]
fn selection_to_timestamp_click_flow() {
    let (element, handle) = SimulatedMediaElement::new();
    let mut session = HighlightSession::new(Box::new(element));

    session.load_result(three_sentence_result());
    handle.finish_loading(60.0);
    session.pump();

    // Adjacent sentences merge, the distant one stays separate
    session.toggle_sentence("s1");
    session.toggle_sentence("s2");
    session.toggle_sentence("s4");
    assert_eq!(
        session.clips(),
        &[Clip::new(0.0, 12.0), Clip::new(30.0, 36.0)]
    );

    // Clicking s4's timestamp jumps to clip 1 at 30s and starts playing
    let mut ack = session.request_timestamp(30.0);
    session.pump();

    assert_eq!(session.controller().state(), ControllerState::PlayingClip(1));
    assert_eq!(handle.current_sec(), 30.0);
    assert!(!handle.paused());
    assert!(ack.try_recv().is_ok());

    // Playback stays inside the clip sequence: finishing clip 1 completes
    // the sequence and rewinds to clip 0
    for _ in 0..40 {
        handle.tick(0.5);
        session.pump();
    }
    assert_eq!(session.controller().state(), ControllerState::StoppedAtClip(0));
    assert_eq!(handle.current_sec(), 0.0);
    assert!(!session.playback().is_playing);
}

#[tokio::test]
async fn mock_job_to_playback_flow() {
    let source = MockTranscriptSource::new(2);
    let result = run_transcription(&source, "demo.mp4", b"bytes", Duration::ZERO)
        .await
        .expect("mock transcription succeeds");

    let (element, handle) = SimulatedMediaElement::new();
    let mut session = HighlightSession::new(Box::new(element));
    session.load_result(result);
    handle.finish_loading(150.0);
    session.pump();

    session.apply_suggested();
    assert_eq!(session.clips().len(), 3);

    // Scrubbing into a gap snaps to the first clip's start
    session.controller_mut().seek_to(20.0);
    session.pump();
    assert_eq!(handle.current_sec(), session.clips()[0].start_sec);
    assert_eq!(session.playback().active_clip_index, 0);
}
