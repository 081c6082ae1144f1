//! Shared types for the Savora platform
//!
//! Common types used across the client SDK: domain models, channel
//! message types, response structures, and API DTOs.

pub mod channel;
pub mod client;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Channel re-exports (for convenient access)
pub use channel::{ChannelFrame, ChannelKind, PushEvent};
