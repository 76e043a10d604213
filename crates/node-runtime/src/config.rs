//! # Runtime Configuration
//!
//! Sane defaults with environment overrides:
//!
//! - `RM_LOG` - tracing filter directive (default `info`)
//! - `RM_OUTBOUND_QUEUE` - outbound envelope queue depth (default 1024)

/// Complete runtime configuration.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Tracing filter directive for the stderr subscriber.
    pub log_filter: String,
    /// Bound of the outbound envelope queue. When the queue is full a
    /// fire-and-forget send fails and is absorbed like any other send
    /// failure; replies share the same queue.
    pub outbound_queue_depth: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            outbound_queue_depth: 1024,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(filter) = std::env::var("RM_LOG") {
            if !filter.is_empty() {
                config.log_filter = filter;
            }
        }
        config.outbound_queue_depth =
            parse_queue_depth(std::env::var("RM_OUTBOUND_QUEUE").ok(), config.outbound_queue_depth);
        config
    }
}

/// A depth of zero would make every send fail; clamp to at least 1.
fn parse_queue_depth(raw: Option<String>, default: usize) -> usize {
    raw.and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
        .max(1)
}
