//! Transcript Module
//!
//! Data model for fetched transcripts (sections of timed sentences) and the
//! user's highlight selection. Transcript data is immutable once received;
//! the selection is the only mutable piece and drives clip recomputation.

mod models;
mod selection;

pub use models::*;
pub use selection::*;
