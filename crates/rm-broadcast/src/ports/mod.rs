//! Ports (hexagonal boundaries) for the broadcast subsystem.

pub mod inbound;
pub mod outbound;
