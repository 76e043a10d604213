//! Dedup store for accepted message identities.

use parking_lot::RwLock;
use std::collections::HashSet;

use super::MessageId;

/// Set and sequence are updated together under one lock so a reader can
/// never observe them out of sync.
#[derive(Debug, Default)]
struct StoreInner {
    seen: HashSet<MessageId>,
    /// Accepted identities in first-acceptance order. Contains exactly the
    /// elements of `seen`, each exactly once.
    order: Vec<MessageId>,
}

/// Dedup store: a set of seen message identities plus the same identities
/// in first-acceptance order.
///
/// Guarded by a single readers-writer lock. Writers are mutually exclusive
/// with each other and with readers; concurrent [`snapshot`](Self::snapshot)
/// readers proceed without blocking each other. The lock is held only for
/// the in-memory mutation or copy, never across a network send.
#[derive(Debug, Default)]
pub struct MessageStore {
    inner: RwLock<StoreInner>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `id` iff it was not previously recorded. Returns whether this
    /// call performed the acceptance. Total; never fails.
    pub fn try_accept(&self, id: MessageId) -> bool {
        let mut inner = self.inner.write();
        if inner.seen.insert(id) {
            inner.order.push(id);
            true
        } else {
            false
        }
    }

    /// Defensive copy of the accepted sequence in first-acceptance order.
    /// Safe to call concurrently with writers; never observes a torn append.
    pub fn snapshot(&self) -> Vec<MessageId> {
        self.inner.read().order.clone()
    }

    /// Membership test without mutation.
    pub fn contains(&self, id: MessageId) -> bool {
        self.inner.read().seen.contains(&id)
    }

    /// Number of accepted identities.
    pub fn len(&self) -> usize {
        self.inner.read().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().order.is_empty()
    }
}
