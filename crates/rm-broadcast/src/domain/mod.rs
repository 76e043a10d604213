//! # Domain Layer for Broadcast
//!
//! Pure in-memory state with no I/O dependencies. This is the innermost
//! layer of the hexagonal architecture.
//!
//! ## Contents
//!
//! - **store**: [`MessageStore`] — dedup set plus insertion-ordered cache
//! - **topology**: [`TopologyRegistry`] — single-assignment neighbor list
//!
//! Both structures are process-wide singletons in practice, but they are
//! never globals: the runtime constructs one of each at startup and shares
//! them with every request handler explicitly.

mod store;
mod topology;

pub use store::MessageStore;
pub use topology::TopologyRegistry;

/// Opaque message identity. Compared by exact value; no internal structure
/// is ever inspected.
pub type MessageId = i64;

/// Node identifier assigned by the cluster transport.
pub type NodeId = String;
