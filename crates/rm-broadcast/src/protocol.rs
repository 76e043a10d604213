//! Wire request/reply bodies for the broadcast protocol.
//!
//! Bodies are JSON objects tagged by a `type` field. Unknown extra fields
//! (transport bookkeeping such as `msg_id`) are tolerated on the inbound
//! side; the transport layer owns them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::{MessageId, NodeId};

/// Inbound request bodies, one per message kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequestBody {
    /// `{"type":"broadcast","message":<i64>}` — accept and relay a message.
    Broadcast { message: MessageId },
    /// `{"type":"read"}` — return every message accepted so far.
    Read,
    /// `{"type":"topology","topology":{<node>:[<node>,...]}}` — one-shot
    /// neighbor assignment for the whole cluster; only this node's entry
    /// matters locally.
    Topology {
        topology: HashMap<NodeId, Vec<NodeId>>,
    },
}

/// Reply bodies, exactly one per handled request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplyBody {
    BroadcastOk,
    ReadOk { messages: Vec<MessageId> },
    TopologyOk,
}
