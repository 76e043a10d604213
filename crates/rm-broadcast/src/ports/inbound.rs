//! Inbound port (API) for the broadcast subsystem.

use std::collections::HashMap;

use crate::domain::{MessageId, NodeId};
use crate::events::BroadcastError;
use crate::protocol::ReplyBody;

/// Request-handling API exposed to the transport layer.
///
/// Each inbound request is handled independently; there is no session state
/// beyond the shared stores. The typed entry points are total — every
/// well-formed request earns exactly one reply.
pub trait BroadcastApi: Send + Sync {
    /// Parse a raw JSON body and dispatch by message kind.
    ///
    /// A body that does not match the expected shape for its kind is a
    /// fatal local error for that request: no state is mutated, no reply
    /// body is produced, and the error surfaces to the caller.
    fn handle_request(
        &self,
        src: &str,
        body: serde_json::Value,
    ) -> Result<ReplyBody, BroadcastError>;

    /// Accept `message` if novel and relay it to every neighbor except the
    /// immediate sender `src`. Replies `broadcast_ok` in all cases.
    fn handle_broadcast(&self, src: &str, message: MessageId) -> ReplyBody;

    /// Snapshot of every message accepted so far, in acceptance order.
    fn handle_read(&self) -> ReplyBody;

    /// One-shot neighbor assignment. Replies `topology_ok` whether or not
    /// the assignment took effect.
    fn handle_topology(&self, topology: HashMap<NodeId, Vec<NodeId>>) -> ReplyBody;
}
