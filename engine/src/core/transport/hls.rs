//! Adaptive Streaming Support
//!
//! Detection of segmented-manifest sources and the client abstraction used
//! to play them. The transport creates a client through the configured
//! factory only when the source URL names an HLS manifest and the element
//! cannot play it natively; the client is destroyed before any re-attach.

use crate::core::CoreResult;

/// Manifest suffix that selects the adaptive streaming path
const HLS_MANIFEST_SUFFIX: &str = ".m3u8";

/// Returns true if the URL names an HLS manifest (literal suffix check)
pub fn is_hls_url(url: &str) -> bool {
    url.trim().ends_with(HLS_MANIFEST_SUFFIX)
}

// =============================================================================
// Adaptive Streamer Trait
// =============================================================================

/// A segmented-streaming client bound to the media element for one source.
///
/// Implementations own decode/network resources; `destroy` must release
/// them so two clients never drive the same element concurrently.
pub trait AdaptiveStreamer: Send {
    /// Begins loading the manifest and feeding the element
    fn load_source(&mut self, url: &str) -> CoreResult<()>;

    /// Releases the client's decode and network resources
    fn destroy(&mut self);
}

/// Creates adaptive streaming clients on demand
pub trait AdaptiveStreamerFactory: Send {
    /// Instantiates a client for a new source
    fn create(&self) -> CoreResult<Box<dyn AdaptiveStreamer>>;
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hls_detection() {
        assert!(is_hls_url("https://cdn.example.com/v/master.m3u8"));
        assert!(is_hls_url("  /videos/demo/index.m3u8 "));
        assert!(!is_hls_url("https://cdn.example.com/v/source.mp4"));
        assert!(!is_hls_url("https://cdn.example.com/v/m3u8/readme.txt"));
    }
}
