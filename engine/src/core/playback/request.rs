//! One-Shot Timestamp Requests
//!
//! External callers (a transcript line click, for example) ask for a jump
//! to a media timestamp through a single-slot request box. The request is
//! taken and acknowledged atomically within one pump, so it can never
//! re-trigger on a later poll.

use tokio::sync::oneshot;
use tracing::debug;

use crate::core::TimeSec;

// =============================================================================
// Timestamp Request
// =============================================================================

/// A one-shot jump request with its acknowledgment channel
#[derive(Debug)]
pub struct TimestampRequest {
    /// Desired media position in seconds
    pub target_sec: TimeSec,
    ack_tx: Option<oneshot::Sender<()>>,
}

impl TimestampRequest {
    /// Creates a request and the receiver its originator can await
    pub fn new(target_sec: TimeSec) -> (Self, oneshot::Receiver<()>) {
        let (ack_tx, ack_rx) = oneshot::channel();
        (
            Self {
                target_sec,
                ack_tx: Some(ack_tx),
            },
            ack_rx,
        )
    }

    /// Signals the originator that the request was handled, consuming it
    pub fn acknowledge(mut self) {
        if let Some(tx) = self.ack_tx.take() {
            // The originator may have dropped its receiver; that's fine
            let _ = tx.send(());
        }
    }
}

// =============================================================================
// Timestamp Slot
// =============================================================================

/// Single-slot mailbox for pending timestamp requests.
///
/// Posting over an unconsumed request replaces it (latest intent wins), and
/// the replaced originator sees its ack channel close.
#[derive(Debug, Default)]
pub struct TimestampSlot {
    pending: Option<TimestampRequest>,
}

impl TimestampSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts a jump request, returning the acknowledgment receiver
    pub fn post(&mut self, target_sec: TimeSec) -> oneshot::Receiver<()> {
        if self.pending.is_some() {
            debug!("Replacing unconsumed timestamp request");
        }
        let (request, ack_rx) = TimestampRequest::new(target_sec);
        self.pending = Some(request);
        ack_rx
    }

    /// Takes the pending request, clearing the slot
    pub fn take(&mut self) -> Option<TimestampRequest> {
        self.pending.take()
    }

    /// Whether a request is waiting
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_clears_slot() {
        let mut slot = TimestampSlot::new();
        let _ack = slot.post(30.0);

        let request = slot.take().unwrap();
        assert_eq!(request.target_sec, 30.0);
        assert!(!slot.is_pending());
        assert!(slot.take().is_none());
    }

    #[test]
    fn test_acknowledge_reaches_originator() {
        let mut slot = TimestampSlot::new();
        let mut ack = slot.post(12.5);

        slot.take().unwrap().acknowledge();

        assert!(ack.try_recv().is_ok());
    }

    #[test]
    fn test_post_replaces_pending_request() {
        let mut slot = TimestampSlot::new();
        let mut first_ack = slot.post(10.0);
        let _second_ack = slot.post(20.0);

        let request = slot.take().unwrap();
        assert_eq!(request.target_sec, 20.0);
        // The replaced request's channel closes without an ack
        assert!(first_ack.try_recv().is_err());
    }

    #[test]
    fn test_acknowledge_with_dropped_receiver() {
        let (request, ack_rx) = TimestampRequest::new(5.0);
        drop(ack_rx);

        // Must not panic
        request.acknowledge();
    }
}
