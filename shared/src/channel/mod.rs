//! Channel message types
//!
//! Shared between the backend push gateway and clients, for both
//! in-process (memory) and network (TCP) delivery.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod payload;
pub use payload::*;

/// Named real-time push topic exposed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelKind {
    /// Scoped by partner user id
    #[serde(rename = "PartnerChannel")]
    Partner,
    /// Scoped by restaurant id
    #[serde(rename = "RestaurantChannel")]
    Restaurant,
    /// Scoped by order id
    #[serde(rename = "OrderChannel")]
    Order,
    /// Scoped by conversation id
    #[serde(rename = "ChatChannel")]
    Chat,
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelKind::Partner => write!(f, "PartnerChannel"),
            ChannelKind::Restaurant => write!(f, "RestaurantChannel"),
            ChannelKind::Order => write!(f, "OrderChannel"),
            ChannelKind::Chat => write!(f, "ChatChannel"),
        }
    }
}

/// One push frame delivered to clients
///
/// Carries the channel + scope it was emitted on, so a client holding
/// several subscriptions can route it to the right handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelFrame {
    pub channel: ChannelKind,
    /// Scoping identifier (user id / restaurant id / order id / conversation id)
    pub scope: String,
    pub event: PushEvent,
}

impl ChannelFrame {
    pub fn new(channel: ChannelKind, scope: impl Into<String>, event: PushEvent) -> Self {
        Self {
            channel,
            scope: scope.into(),
            event,
        }
    }

    /// Serialize for transport
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Parse from transport bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

/// Control message sent by clients to the push gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ChannelCommand {
    Subscribe { channel: ChannelKind, scope: String },
    Unsubscribe { channel: ChannelKind, scope: String },
}

impl ChannelCommand {
    /// Serialize for transport
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Parse from transport bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
