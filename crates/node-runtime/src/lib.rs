//! # RelayMesh Node Runtime
//!
//! The runnable broadcast node. Supplies everything the core subsystem
//! treats as an external collaborator: line-delimited JSON envelope framing
//! over stdin/stdout, the `init` handshake that assigns this node its
//! identity, reply correlation via `msg_id`/`in_reply_to`, and a serialized
//! stdout writer.
//!
//! ## Modular Structure
//!
//! - `config` - Runtime configuration with environment overrides
//! - `envelope` - Wire envelope framing and the init handshake body
//! - `adapters` - Outbound transport adapter implementing `PeerTransport`
//! - `runtime` - The request loop: one tokio task per inbound request
//!
//! ## Wire Contract
//!
//! ```text
//! stdin  ──{"src":..,"dest":..,"body":{..}}──→ [NodeRuntime]
//!                                                   │ per-request task
//!                                                   ↓
//!                                         [BroadcastCoordinator]
//!                                                   │ replies + fanout
//!                                                   ↓
//!                                       mpsc queue → single stdout writer
//! ```
//!
//! All log output goes to stderr; stdout carries only protocol envelopes.

pub mod adapters;
pub mod config;
pub mod envelope;
pub mod runtime;

pub use config::RuntimeConfig;
pub use runtime::NodeRuntime;
