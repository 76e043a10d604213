//! Wire envelope framing.
//!
//! Every protocol message travels as one JSON object per line:
//! `{"src": <node>, "dest": <node>, "body": {..}}`. The body always carries
//! a `type` tag; requests may carry `msg_id` and replies echo it back as
//! `in_reply_to`.

use serde::{Deserialize, Serialize};

/// One framed protocol message.
///
/// The body stays a raw JSON value here: the runtime only inspects the
/// transport bookkeeping fields (`type`, `msg_id`, `in_reply_to`) and hands
/// the rest to the coordinator for parsing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope {
    pub src: String,
    pub dest: String,
    pub body: serde_json::Value,
}

impl Envelope {
    /// The body's `type` tag, if present.
    pub fn kind(&self) -> Option<&str> {
        self.body.get("type")?.as_str()
    }

    /// The request's `msg_id`, if the sender assigned one.
    pub fn msg_id(&self) -> Option<u64> {
        self.body.get("msg_id")?.as_u64()
    }

    /// Replies carry `in_reply_to`; they are routed to whoever is waiting
    /// on them, never dispatched as fresh requests.
    pub fn is_reply(&self) -> bool {
        self.body.get("in_reply_to").is_some()
    }
}

/// Body of the `init` handshake, the first message every node receives.
#[derive(Debug, Deserialize)]
pub struct InitBody {
    /// Identity assigned to this node for the process lifetime.
    pub node_id: String,
    /// All node identities in the cluster. Kept for logging; the neighbor
    /// list arrives later via the topology request.
    #[serde(default)]
    pub node_ids: Vec<String>,
}
