//! Outbound port (SPI) for the broadcast subsystem.

use crate::events::BroadcastError;
use crate::protocol::RequestBody;

/// Best-effort send-to-peer primitive supplied by the transport substrate.
///
/// Sends are fire-and-forget: the implementation must not block on remote
/// acknowledgement, and the coordinator never retries a failed send. May be
/// called concurrently from multiple request handlers.
pub trait PeerTransport: Send + Sync {
    fn send(&self, dest: &str, body: &RequestBody) -> Result<(), BroadcastError>;
}
