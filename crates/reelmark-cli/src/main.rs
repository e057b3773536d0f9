//! Reelmark CLI
//!
//! Headless front end over the engine: runs the mock transcription job,
//! applies suggested highlights, prints the merged clip plan, and can
//! simulate clip-constrained playback end to end.

use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use reelmark::core::format_timestamp;
use reelmark::core::jobs::{run_transcription, MockTranscriptSource, TranscriptResult};
use reelmark::core::transport::{SimHandle, SimulatedMediaElement};
use reelmark::HighlightSession;

#[derive(Parser)]
#[command(name = "reelmark-cli", about = "Headless highlight planning and playback simulation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the mock transcription job and print the highlight plan
    Plan {
        /// Polls the mock job spends running before completing
        #[arg(long, default_value_t = 2)]
        polls: u32,

        /// Print the merged clip list as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Simulate clip-constrained playback of the suggested highlights
    Simulate {
        /// Simulated media clock step in seconds
        #[arg(long, default_value_t = 0.25)]
        step_sec: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Plan { polls, json } => plan(polls, json).await,
        Command::Simulate { step_sec } => simulate(step_sec).await,
    }
}

async fn fetch_transcript(polls: u32) -> anyhow::Result<TranscriptResult> {
    let source = MockTranscriptSource::new(polls);
    run_transcription(&source, "demo.mp4", b"demo", Duration::from_millis(50))
        .await
        .context("transcription job failed")
}

fn loaded_session(result: TranscriptResult) -> (HighlightSession, SimHandle, f64) {
    let duration = result.duration_sec;
    let (element, handle) = SimulatedMediaElement::new();
    let mut session = HighlightSession::new(Box::new(element));
    session.load_result(result);
    handle.finish_loading(duration);
    session.pump();
    (session, handle, duration)
}

async fn plan(polls: u32, json: bool) -> anyhow::Result<()> {
    let result = fetch_transcript(polls).await?;
    let (mut session, _handle, duration) = loaded_session(result);
    session.apply_suggested();

    if json {
        println!("{}", serde_json::to_string_pretty(session.clips())?);
        return Ok(());
    }

    let transcript = session
        .transcript()
        .context("transcript was just loaded")?;

    println!("Transcript ({} total):", format_timestamp(duration));
    for section in &transcript.sections {
        println!(
            "\n  {} [{} - {}]",
            section.title,
            format_timestamp(section.start_sec),
            format_timestamp(section.end_sec)
        );
        for sentence in &section.sentences {
            let marker = if session.selection().contains(&sentence.id) {
                "[x]"
            } else {
                "[ ]"
            };
            println!(
                "    {} {} {}  {}",
                marker,
                format_timestamp(sentence.start_sec),
                sentence.id,
                sentence.text
            );
        }
    }

    println!("\nMerged clips ({}):", session.clips().len());
    for (i, clip) in session.clips().iter().enumerate() {
        println!(
            "  {}. {} - {}  ({:.1}s)",
            i + 1,
            format_timestamp(clip.start_sec),
            format_timestamp(clip.end_sec),
            clip.duration()
        );
    }

    println!("\nExport ranges:\n{}", session.export_ranges());
    Ok(())
}

async fn simulate(step_sec: f64) -> anyhow::Result<()> {
    anyhow::ensure!(step_sec > 0.0, "step must be positive");

    let result = fetch_transcript(0).await?;
    let (mut session, handle, _duration) = loaded_session(result);
    session.apply_suggested();

    println!("Playing {} clips:", session.clips().len());
    session.controller_mut().play();
    session.pump();

    let mut last_index = session.playback().active_clip_index;
    let mut last_caption: Option<String> = None;
    print_clip(&session, last_index);

    // Bounded run so a logic regression cannot spin forever
    let max_ticks = (3600.0 / step_sec) as u32;
    for _ in 0..max_ticks {
        if !session.playback().is_playing {
            break;
        }

        handle.tick(step_sec);
        session.pump();

        let index = session.playback().active_clip_index;
        if index != last_index && session.playback().is_playing {
            last_index = index;
            print_clip(&session, index);
        }

        let caption = session.active_caption().map(|c| c.to_string());
        if caption != last_caption {
            if let Some(text) = &caption {
                println!(
                    "    [{}] {}",
                    format_timestamp(session.playback().current_sec),
                    text
                );
            }
            last_caption = caption;
        }
    }

    println!(
        "Sequence complete, parked at {} (clip {}).",
        format_timestamp(session.playback().current_sec),
        session.playback().active_clip_index + 1
    );
    Ok(())
}

fn print_clip(session: &HighlightSession, index: usize) {
    let clip = &session.clips()[index];
    println!(
        "  clip {}/{}: {} - {}",
        index + 1,
        session.clips().len(),
        format_timestamp(clip.start_sec),
        format_timestamp(clip.end_sec)
    );
}
