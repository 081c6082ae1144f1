//! Conversation and Chat Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which side of the conversation a message came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageSide {
    Customer,
    Partner,
}

/// Conversation between a customer and a delivery partner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub order_id: Option<String>,
    /// Display name of the other participant
    pub counterpart_name: String,
    pub last_message: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Single chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub conversation_id: String,
    pub side: MessageSide,
    pub body: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Send message payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessageCreate {
    pub body: String,
}
