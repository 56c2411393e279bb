use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Smallest buffer that still holds a classic (non-EDNS) UDP DNS message.
pub const MIN_RECV_BUFFER_SIZE: usize = 512;

/// Largest UDP payload.
pub const MAX_RECV_BUFFER_SIZE: usize = 65_535;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Seconds to wait for the reply datagram; `0` waits forever.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Receive buffer size. Replies larger than this are truncated.
    #[serde(default = "default_recv_buffer_size")]
    pub recv_buffer_size: usize,

    /// Reject malformed `key=value` metadata instead of skipping it.
    #[serde(default)]
    pub strict_metadata: bool,
}

impl QueryConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            recv_buffer_size: default_recv_buffer_size(),
            strict_metadata: false,
        }
    }
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_recv_buffer_size() -> usize {
    4096
}
