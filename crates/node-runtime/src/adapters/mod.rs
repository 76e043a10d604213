//! Port adapters connecting the broadcast core to the wire.

mod transport;

pub use transport::{spawn_writer, MeshTransport};
