//! In-memory cluster harness.
//!
//! Wires several coordinators directly to each other through the
//! `PeerTransport` port: a send is delivered synchronously into the
//! destination coordinator, so a whole gossip cascade completes before the
//! originating call returns. Every delivery is recorded for assertions.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use rm_broadcast::{
    BroadcastApi, BroadcastCoordinator, BroadcastError, MessageId, MessageStore, NodeId,
    PeerTransport, ReplyBody, RequestBody, TopologyRegistry,
};

/// One recorded delivery: (from, to, message).
pub type Delivery = (NodeId, NodeId, MessageId);

/// A cluster of in-process nodes sharing one delivery log.
#[derive(Default)]
pub struct MemoryCluster {
    nodes: RwLock<HashMap<NodeId, Arc<BroadcastCoordinator<MemoryLink>>>>,
    log: Mutex<Vec<Delivery>>,
}

impl MemoryCluster {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Add a node and return its coordinator.
    pub fn add_node(self: &Arc<Self>, id: &str) -> Arc<BroadcastCoordinator<MemoryLink>> {
        let link = Arc::new(MemoryLink {
            origin: id.to_string(),
            cluster: Arc::clone(self),
        });
        let coordinator = Arc::new(BroadcastCoordinator::new(
            id.to_string(),
            Arc::new(MessageStore::new()),
            Arc::new(TopologyRegistry::new()),
            link,
        ));
        self.nodes
            .write()
            .insert(id.to_string(), Arc::clone(&coordinator));
        coordinator
    }

    /// Push the same full-cluster topology map to every node.
    pub fn assign_topology(&self, topology: &HashMap<NodeId, Vec<NodeId>>) {
        for coordinator in self.nodes.read().values() {
            assert_eq!(
                coordinator.handle_topology(topology.clone()),
                ReplyBody::TopologyOk
            );
        }
    }

    pub fn node(&self, id: &str) -> Arc<BroadcastCoordinator<MemoryLink>> {
        Arc::clone(self.nodes.read().get(id).expect("unknown node"))
    }

    /// Every delivery recorded so far.
    pub fn deliveries(&self) -> Vec<Delivery> {
        self.log.lock().clone()
    }
}

/// Convenience constructor for topology maps.
pub fn topology(entries: &[(&str, &[&str])]) -> HashMap<NodeId, Vec<NodeId>> {
    entries
        .iter()
        .map(|(node, neighbors)| {
            (
                node.to_string(),
                neighbors.iter().map(|n| n.to_string()).collect(),
            )
        })
        .collect()
}

/// Per-node outbound link delivering straight into the peer coordinator.
pub struct MemoryLink {
    origin: NodeId,
    cluster: Arc<MemoryCluster>,
}

impl PeerTransport for MemoryLink {
    fn send(&self, dest: &str, body: &RequestBody) -> Result<(), BroadcastError> {
        let RequestBody::Broadcast { message } = body else {
            return Err(BroadcastError::SendFailed {
                dest: dest.to_string(),
                reason: "only broadcast bodies cross the mesh".to_string(),
            });
        };

        self.cluster
            .log
            .lock()
            .push((self.origin.clone(), dest.to_string(), *message));

        let peer = self.cluster.nodes.read().get(dest).cloned();
        let Some(peer) = peer else {
            return Err(BroadcastError::SendFailed {
                dest: dest.to_string(),
                reason: "unreachable".to_string(),
            });
        };
        peer.handle_broadcast(&self.origin, *message);
        Ok(())
    }
}
