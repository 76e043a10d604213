//! # RelayMesh Test Suite
//!
//! Cross-crate integration tests:
//!
//! - `support` - in-memory cluster harness wiring coordinators directly to
//!   each other through the `PeerTransport` port
//! - `integration::convergence` - multi-node dissemination properties
//! - `integration::protocol_flows` - full line-protocol sessions against
//!   the runtime over in-memory pipes

pub mod support;

mod integration;
