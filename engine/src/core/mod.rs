//! Reelmark Core Engine
//!
//! Core highlight-editing engine module. Handles transcript ingestion,
//! highlight selection, clip derivation, caption projection, and
//! clip-constrained playback.

pub mod captions;
pub mod clips;
pub mod export;
pub mod jobs;
pub mod playback;
pub mod scrub;
pub mod transcript;
pub mod transport;

// Re-export common types
mod types;
pub use types::*;

mod error;
pub use error::*;
