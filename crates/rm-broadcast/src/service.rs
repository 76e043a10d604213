//! # Broadcast Coordinator
//!
//! The main service implementation of the accept/forward/reply protocol.
//!
//! ## Architecture
//!
//! Implements the inbound [`BroadcastApi`] port on top of two shared domain
//! stores and one outbound port (implemented by an adapter in node-runtime):
//!
//! - [`MessageStore`]: dedup + acceptance-ordered cache
//! - [`TopologyRegistry`]: one-shot neighbor assignment
//! - [`PeerTransport`]: best-effort send-to-peer primitive
//!
//! ## Thread Safety
//!
//! The coordinator is shared across request tasks via `Arc`; the stores
//! carry their own synchronization. The store lock for an accept is released
//! before any fanout send fires, so a slow or unreachable neighbor cannot
//! stall ingestion of subsequent messages or block concurrent reads.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{MessageId, MessageStore, NodeId, TopologyRegistry};
use crate::events::BroadcastError;
use crate::ports::inbound::BroadcastApi;
use crate::ports::outbound::PeerTransport;
use crate::protocol::{ReplyBody, RequestBody};

/// Request handler wiring the dedup store and topology registry to the
/// transport's fanout primitive.
pub struct BroadcastCoordinator<T: PeerTransport> {
    /// This node's identity, used to pick its own topology entry and never
    /// sent anywhere.
    node_id: NodeId,
    store: Arc<MessageStore>,
    registry: Arc<TopologyRegistry>,
    transport: Arc<T>,
}

impl<T: PeerTransport> BroadcastCoordinator<T> {
    pub fn new(
        node_id: NodeId,
        store: Arc<MessageStore>,
        registry: Arc<TopologyRegistry>,
        transport: Arc<T>,
    ) -> Self {
        Self {
            node_id,
            store,
            registry,
            transport,
        }
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    pub fn registry(&self) -> &TopologyRegistry {
        &self.registry
    }

    /// Relay `message` to every neighbor except `src`. Fire-and-forget: a
    /// failed send is logged and absorbed, never retried.
    ///
    /// A client outside the topology matches no neighbor, so all neighbors
    /// receive the forward.
    fn fan_out(&self, src: &str, message: MessageId) {
        let Some(neighbors) = self.registry.get() else {
            debug!(message, "no topology assigned yet; accepting without fanout");
            return;
        };

        let forward = RequestBody::Broadcast { message };
        for neighbor in neighbors.iter().filter(|n| n.as_str() != src) {
            if let Err(err) = self.transport.send(neighbor, &forward) {
                warn!(%neighbor, message, %err, "fanout send failed; message not retried");
            }
        }
    }
}

impl<T: PeerTransport> BroadcastApi for BroadcastCoordinator<T> {
    fn handle_request(
        &self,
        src: &str,
        body: serde_json::Value,
    ) -> Result<ReplyBody, BroadcastError> {
        let request: RequestBody = serde_json::from_value(body)?;
        Ok(match request {
            RequestBody::Broadcast { message } => self.handle_broadcast(src, message),
            RequestBody::Read => self.handle_read(),
            RequestBody::Topology { topology } => self.handle_topology(topology),
        })
    }

    fn handle_broadcast(&self, src: &str, message: MessageId) -> ReplyBody {
        if self.store.try_accept(message) {
            debug!(message, %src, "accepted novel message");
            // The accept lock is already released here; sends never hold it.
            self.fan_out(src, message);
        } else {
            debug!(message, %src, "duplicate suppressed");
        }
        ReplyBody::BroadcastOk
    }

    fn handle_read(&self) -> ReplyBody {
        ReplyBody::ReadOk {
            messages: self.store.snapshot(),
        }
    }

    fn handle_topology(&self, mut topology: HashMap<NodeId, Vec<NodeId>>) -> ReplyBody {
        let mine = topology.remove(&self.node_id).unwrap_or_default();
        if self.registry.try_set(mine) {
            debug!(neighbors = ?self.registry.get(), "topology assigned");
        } else {
            debug!("topology already assigned; reassignment ignored");
        }
        ReplyBody::TopologyOk
    }
}
