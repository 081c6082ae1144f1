//! Conversation and chat endpoints

use crate::{ClientError, ClientResult, HttpClient};
use shared::client::ApiResponse;
use shared::models::conversation::{ChatMessage, ChatMessageCreate, Conversation};
use shared::models::session::Role;

/// Customer-partner chat endpoints
#[derive(Debug, Clone)]
pub struct ConversationService {
    http: HttpClient,
    role: Role,
}

impl ConversationService {
    pub fn new(http: HttpClient, role: Role) -> Self {
        Self { http, role }
    }

    pub async fn list_conversations(&self) -> ClientResult<Vec<Conversation>> {
        if !self.role.is_authenticated() {
            return Ok(Vec::new());
        }

        Ok(self
            .http
            .get::<ApiResponse<Vec<Conversation>>>("api/conversations")
            .await?
            .data
            .unwrap_or_default())
    }

    pub async fn messages(&self, conversation_id: &str) -> ClientResult<Vec<ChatMessage>> {
        if !self.role.is_authenticated() {
            return Ok(Vec::new());
        }

        let path = format!("api/conversations/{}/messages", conversation_id);
        Ok(self
            .http
            .get::<ApiResponse<Vec<ChatMessage>>>(&path)
            .await?
            .data
            .unwrap_or_default())
    }

    pub async fn send_message(
        &self,
        conversation_id: &str,
        body: impl Into<String>,
    ) -> ClientResult<ChatMessage> {
        let path = format!("api/conversations/{}/messages", conversation_id);
        let request = ChatMessageCreate { body: body.into() };
        self.http
            .post::<ApiResponse<ChatMessage>, _>(&path, &request)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing message data".to_string()))
    }
}
