//! # Broadcast Subsystem
//!
//! Per-node logic of the RelayMesh broadcast-dissemination service. Accepts
//! opaque integer messages delivered by peers or clients, suppresses
//! duplicates, and relays novel messages to the node's configured neighbors
//! so that every node's locally visible message set eventually converges to
//! the full set introduced anywhere in the cluster.
//!
//! ## Architecture Role
//!
//! ```text
//! [Transport] ──request(src, body)──→ [BroadcastCoordinator]
//!                                          │        │
//!                                 MessageStore   TopologyRegistry
//!                                          │
//!                                          ↓ fanout (neighbors minus sender)
//!                                  ┌───────┴───────┐
//!                                  ↓               ↓
//!                             [Peer A]        [Peer B] ...
//! ```
//!
//! The transport substrate is an external collaborator, reached only through
//! the [`PeerTransport`] outbound port. This crate performs no I/O of its own.
//!
//! ## Delivery Model
//!
//! At-least-once delivery plus idempotent acceptance: a message may arrive
//! more than once (and from more than one neighbor), and the dedup store is
//! the sole mechanism preventing gossip storms in cyclic topologies. Fanout
//! is fire-and-forget; a failed send is absorbed, never retried here.

pub mod domain;
pub mod events;
pub mod ports;
pub mod protocol;
pub mod service;

pub use domain::{MessageId, MessageStore, NodeId, TopologyRegistry};
pub use events::BroadcastError;
pub use ports::inbound::BroadcastApi;
pub use ports::outbound::PeerTransport;
pub use protocol::{ReplyBody, RequestBody};
pub use service::BroadcastCoordinator;
