//! Single-assignment registry for this node's neighbor list.

use std::sync::OnceLock;

use super::NodeId;

/// One-shot slot for the neighbor list assigned by the external coordinator.
///
/// The protocol expects exactly one topology assignment per process
/// lifetime; honoring only the first write avoids ambiguity from duplicate
/// or malicious reassignment. Readers never block and never observe a
/// partially constructed list; racing writers are harmless (first wins,
/// losers observe `false`).
#[derive(Debug, Default)]
pub struct TopologyRegistry {
    slot: OnceLock<Vec<NodeId>>,
}

impl TopologyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `neighbors` iff the registry is currently unset. Returns
    /// whether this call performed the assignment; all later calls are
    /// no-ops returning `false`.
    pub fn try_set(&self, neighbors: Vec<NodeId>) -> bool {
        self.slot.set(neighbors).is_ok()
    }

    /// The assigned neighbor list, or `None` before assignment.
    pub fn get(&self) -> Option<&[NodeId]> {
        self.slot.get().map(Vec::as_slice)
    }
}
