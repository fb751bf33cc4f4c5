// src/services/chat_service.rs
//
// Chat Service - conversations and one-shot message operations.
// Periodic refresh lives in chat_poller.rs.

use std::sync::Arc;

use crate::domain::{validate_message_body, Conversation, ConversationId, Message};
use crate::error::AppResult;
use crate::events::{EventBus, MessageSent};
use crate::integrations::JobBoardApi;
use crate::services::session_service::SessionService;

pub struct ChatService {
    api: Arc<dyn JobBoardApi>,
    session: Arc<SessionService>,
    event_bus: Arc<EventBus>,
}

impl ChatService {
    pub fn new(
        api: Arc<dyn JobBoardApi>,
        session: Arc<SessionService>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            api,
            session,
            event_bus,
        }
    }

    pub async fn conversations(&self) -> AppResult<Vec<Conversation>> {
        self.session.require_user()?;
        self.session.intercept(self.api.conversations()).await
    }

    pub async fn messages(&self, conversation_id: ConversationId) -> AppResult<Vec<Message>> {
        self.session.require_user()?;
        self.session
            .intercept(self.api.messages(conversation_id)).await
    }

    /// Send a message; the backend's stored copy is returned.
    pub async fn send_message(
        &self,
        conversation_id: ConversationId,
        body: &str,
    ) -> AppResult<Message> {
        self.session.require_user()?;
        validate_message_body(body)?;

        let message = self
            .session
            .intercept(self.api.send_message(conversation_id, body)).await?;
        self.event_bus
            .emit(MessageSent::new(conversation_id, message.id));
        Ok(message)
    }
}
