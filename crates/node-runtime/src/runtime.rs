//! # Request Loop
//!
//! Reads envelopes line by line, performs the `init` handshake, then hands
//! every subsequent request to the coordinator on its own tokio task.
//!
//! ## Failure Semantics
//!
//! - Unparseable envelope or malformed body: logged, dropped, no reply —
//!   the requester observes a timeout.
//! - Requests arriving before `init`: dropped with an error log.
//! - Stray replies (bodies carrying `in_reply_to`): ignored; nothing in
//!   this node awaits acknowledgements.
//! - EOF on stdin: the loop ends and the writer drains before exit.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use rm_broadcast::{
    BroadcastApi, BroadcastCoordinator, MessageStore, TopologyRegistry,
};

use crate::adapters::{spawn_writer, MeshTransport};
use crate::config::RuntimeConfig;
use crate::envelope::{Envelope, InitBody};

/// The node runtime: owns the wire, constructs the coordinator once the
/// cluster has named this node, and fans requests out to worker tasks.
pub struct NodeRuntime {
    config: RuntimeConfig,
}

impl NodeRuntime {
    pub fn new(config: RuntimeConfig) -> Self {
        Self { config }
    }

    /// Serve the protocol over stdin/stdout until EOF.
    pub async fn run(&self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        self.serve(stdin, tokio::io::stdout()).await
    }

    /// Serve the protocol over arbitrary line-oriented streams.
    pub async fn serve<R, W>(&self, reader: R, sink: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let mut lines = reader.lines();
        let (outbound, queue) = mpsc::channel(self.config.outbound_queue_depth);
        let writer = spawn_writer(sink, queue);

        // Init handshake: the first well-formed init message names this
        // node; anything before it cannot be answered and is dropped.
        let Some((transport, coordinator)) = self.await_init(&mut lines, &outbound).await? else {
            drop(outbound);
            writer.await.context("writer task failed")?;
            return Ok(());
        };

        while let Some(line) = lines.next_line().await.context("reading request stream")? {
            let envelope = match serde_json::from_str::<Envelope>(&line) {
                Ok(envelope) => envelope,
                Err(err) => {
                    error!(%err, "unparseable envelope; dropping");
                    continue;
                }
            };
            if envelope.is_reply() {
                debug!(src = %envelope.src, kind = ?envelope.kind(), "ignoring peer reply");
                continue;
            }

            let coordinator = Arc::clone(&coordinator);
            let transport = Arc::clone(&transport);
            tokio::spawn(async move {
                let request_id = envelope.msg_id();
                match coordinator.handle_request(&envelope.src, envelope.body) {
                    Ok(reply) => match serde_json::to_value(&reply) {
                        Ok(body) => {
                            if let Err(err) = transport.send_reply(&envelope.src, request_id, body)
                            {
                                warn!(dest = %envelope.src, %err, "reply dropped");
                            }
                        }
                        Err(err) => error!(%err, "reply serialization failed"),
                    },
                    Err(err) => {
                        error!(src = %envelope.src, %err, "malformed request; no reply sent");
                    }
                }
            });
        }

        info!("request stream closed; draining writer");
        drop(transport);
        drop(coordinator);
        drop(outbound);
        writer.await.context("writer task failed")?;
        Ok(())
    }

    /// Consume lines until the init handshake completes. Returns `None` on
    /// EOF before init.
    async fn await_init<R>(
        &self,
        lines: &mut tokio::io::Lines<R>,
        outbound: &mpsc::Sender<Envelope>,
    ) -> Result<Option<InitializedNode>>
    where
        R: AsyncBufRead + Unpin,
    {
        while let Some(line) = lines.next_line().await.context("reading init stream")? {
            let envelope = match serde_json::from_str::<Envelope>(&line) {
                Ok(envelope) => envelope,
                Err(err) => {
                    error!(%err, "unparseable envelope before init; dropping");
                    continue;
                }
            };
            if envelope.kind() != Some("init") {
                error!(kind = ?envelope.kind(), src = %envelope.src, "request before init; dropping");
                continue;
            }

            let init: InitBody =
                serde_json::from_value(envelope.body.clone()).context("malformed init body")?;
            info!(node_id = %init.node_id, cluster_size = init.node_ids.len(), "node initialized");

            let transport = Arc::new(MeshTransport::new(init.node_id.clone(), outbound.clone()));
            let coordinator = Arc::new(BroadcastCoordinator::new(
                init.node_id,
                Arc::new(MessageStore::new()),
                Arc::new(TopologyRegistry::new()),
                Arc::clone(&transport),
            ));
            transport.send_reply(
                &envelope.src,
                envelope.msg_id(),
                serde_json::json!({"type": "init_ok"}),
            )?;
            return Ok(Some((transport, coordinator)));
        }

        warn!("stream ended before init; nothing served");
        Ok(None)
    }
}

type InitializedNode = (
    Arc<MeshTransport>,
    Arc<BroadcastCoordinator<MeshTransport>>,
);
