//! # Outbound Transport Adapter
//!
//! Implements the core's `PeerTransport` port on top of a bounded mpsc
//! queue drained by a single writer task, so outbound lines never
//! interleave. Every outbound message gets a fresh `msg_id` from an atomic
//! counter; replies additionally echo the request's `msg_id` as
//! `in_reply_to`.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::error;

use rm_broadcast::{BroadcastError, NodeId, PeerTransport, RequestBody};

use crate::envelope::Envelope;

/// Outbound side of the node: stamps envelopes with this node's identity
/// and queues them for the writer task.
///
/// `send` is synchronous and non-blocking: when the queue is full the send
/// fails immediately, which the coordinator absorbs like any other
/// fire-and-forget failure.
pub struct MeshTransport {
    node_id: NodeId,
    next_msg_id: AtomicU64,
    outbound: mpsc::Sender<Envelope>,
}

impl MeshTransport {
    pub fn new(node_id: NodeId, outbound: mpsc::Sender<Envelope>) -> Self {
        Self {
            node_id,
            next_msg_id: AtomicU64::new(0),
            outbound,
        }
    }

    fn next_msg_id(&self) -> u64 {
        self.next_msg_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Queue a reply body, correlating it to the request's `msg_id` when
    /// the requester assigned one.
    pub fn send_reply(
        &self,
        dest: &str,
        in_reply_to: Option<u64>,
        mut body: serde_json::Value,
    ) -> Result<(), BroadcastError> {
        if let Some(fields) = body.as_object_mut() {
            fields.insert("msg_id".to_string(), self.next_msg_id().into());
            if let Some(request_id) = in_reply_to {
                fields.insert("in_reply_to".to_string(), request_id.into());
            }
        }
        self.enqueue(dest, body)
    }

    fn enqueue(&self, dest: &str, body: serde_json::Value) -> Result<(), BroadcastError> {
        let envelope = Envelope {
            src: self.node_id.clone(),
            dest: dest.to_string(),
            body,
        };
        self.outbound
            .try_send(envelope)
            .map_err(|err| BroadcastError::SendFailed {
                dest: dest.to_string(),
                reason: err.to_string(),
            })
    }
}

impl PeerTransport for MeshTransport {
    fn send(&self, dest: &str, body: &RequestBody) -> Result<(), BroadcastError> {
        let mut value = serde_json::to_value(body).map_err(|err| BroadcastError::SendFailed {
            dest: dest.to_string(),
            reason: err.to_string(),
        })?;
        if let Some(fields) = value.as_object_mut() {
            fields.insert("msg_id".to_string(), self.next_msg_id().into());
        }
        self.enqueue(dest, value)
    }
}

/// Drain the outbound queue onto `sink`, one JSON envelope per line.
///
/// Runs until every queue sender is dropped; the runtime awaits the handle
/// on shutdown so queued replies are flushed before exit.
pub fn spawn_writer<W>(mut sink: W, mut outbound: mpsc::Receiver<Envelope>) -> JoinHandle<()>
where
    W: AsyncWrite + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        while let Some(envelope) = outbound.recv().await {
            let mut line = match serde_json::to_string(&envelope) {
                Ok(line) => line,
                Err(err) => {
                    error!(%err, dest = %envelope.dest, "dropping unserializable envelope");
                    continue;
                }
            };
            line.push('\n');
            if let Err(err) = sink.write_all(line.as_bytes()).await {
                error!(%err, "writer terminating: sink closed");
                return;
            }
            if let Err(err) = sink.flush().await {
                error!(%err, "writer terminating: flush failed");
                return;
            }
        }
    })
}
