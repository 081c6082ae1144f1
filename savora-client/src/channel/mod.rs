//! Real-time channel client
//!
//! One process-wide connection to the push gateway, with named channel
//! subscriptions delivering events to registered handlers.

mod client;
mod transport;

pub use client::{ChannelClient, SubscriptionHandle};
pub use shared::channel::{ChannelCommand, ChannelFrame, ChannelKind, PushEvent};
pub use transport::{MemoryTransport, TcpTransport, Transport};

use std::time::Duration;
use thiserror::Error;

/// Channel error type
#[derive(Debug, Error)]
pub enum ChannelError {
    /// Connection establishment or transport failure
    #[error("Connection error: {0}")]
    Connection(String),

    /// IO error on the underlying stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Frame that does not parse as the channel protocol
    #[error("Invalid frame: {0}")]
    InvalidFrame(String),

    /// The connection is gone and will not be retried
    #[error("Channel closed")]
    Closed,
}

/// Connection state, published on a watch channel
///
/// Subscriptions are NOT replayed after a reconnect; callers observe
/// `Connected` after a `Reconnecting` phase and re-subscribe themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    Reconnecting { attempt: u32 },
    Disconnected,
}

/// Channel client configuration
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    /// Fixed delay between reconnect attempts
    pub reconnect_delay: Duration,
    /// Maximum reconnect attempts before giving up
    pub max_reconnect_attempts: u32,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            reconnect_delay: Duration::from_secs(5),
            max_reconnect_attempts: 3,
        }
    }
}

impl ChannelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reconnect delay
    pub fn with_reconnect_delay(mut self, delay: Duration) -> Self {
        self.reconnect_delay = delay;
        self
    }

    /// Set the maximum reconnect attempts
    pub fn with_max_reconnect_attempts(mut self, attempts: u32) -> Self {
        self.max_reconnect_attempts = attempts;
        self
    }
}
