//! Error types for the broadcast subsystem.

use thiserror::Error;

use crate::domain::NodeId;

/// Broadcast subsystem errors.
///
/// A malformed request is fatal for that single request: no state mutation
/// occurs, no reply is sent, and the error propagates to the transport
/// caller. A failed fanout send is non-fatal under the fire-and-forget
/// policy and is absorbed (logged) by the coordinator.
#[derive(Debug, Error)]
pub enum BroadcastError {
    #[error("malformed request body: {0}")]
    MalformedRequest(#[from] serde_json::Error),

    #[error("send to {dest} failed: {reason}")]
    SendFailed { dest: NodeId, reason: String },
}
