// src/application/views/chat.rs
//
// Chat page: conversation list plus the polled message window.
// Dropping the view drops its poller, which stops polling.

use std::sync::Arc;
use std::time::Duration;

use crate::application::view_error::{ErrorCopy, ViewError};
use crate::application::view_state::{ViewSlot, ViewState};
use crate::application::views::{load_into, settle};
use crate::domain::{Conversation, ConversationId, Message};
use crate::error::AppError;
use crate::events::EventBus;
use crate::services::{ChatPoller, ChatService, MessageWindow};

const CONVERSATIONS_COPY: ErrorCopy = ErrorCopy::new("Failed to load conversations.");

const SEND_COPY: ErrorCopy = ErrorCopy::new("Failed to send message.");

pub struct ChatView {
    chat: Arc<ChatService>,
    poller: ChatPoller,
    conversations: ViewSlot<(), Vec<Conversation>>,
}

impl ChatView {
    pub fn new(chat: Arc<ChatService>, event_bus: Arc<EventBus>, poll_interval: Duration) -> Self {
        Self {
            poller: ChatPoller::new(Arc::clone(&chat), event_bus, poll_interval),
            chat,
            conversations: ViewSlot::new(),
        }
    }

    pub async fn load_conversations(&self) -> ViewState<Vec<Conversation>> {
        load_into(
            &self.conversations,
            (),
            &CONVERSATIONS_COPY,
            self.chat.conversations(),
        )
        .await
    }

    /// Show `conversation` in the message window and start polling it.
    /// `None` closes the window.
    pub fn select(&self, conversation: Option<ConversationId>) -> MessageWindow {
        self.poller.select(conversation);
        self.poller.snapshot()
    }

    pub fn window(&self) -> MessageWindow {
        self.poller.snapshot()
    }

    /// Send to the selected conversation. The stored copy is appended to
    /// the window without waiting for the next poll.
    pub async fn send(&self, body: &str) -> Result<Message, ViewError> {
        let conversation_id = match self.poller.selected() {
            Some(id) => id,
            None => {
                return Err(ViewError::Validation(
                    "Select a conversation first.".to_string(),
                ))
            }
        };

        let result = self.chat.send_message(conversation_id, body).await;
        // Blank input never reached the backend
        let rejected_locally = matches!(result, Err(AppError::Domain(_)));

        match settle(result, &SEND_COPY) {
            Ok(message) => {
                self.poller.append_sent(conversation_id, message.clone());
                Ok(message)
            }
            Err(error) => {
                if !rejected_locally {
                    self.poller.report_error(conversation_id, error.message());
                }
                Err(error)
            }
        }
    }

    pub fn is_polling(&self) -> bool {
        self.poller.is_polling()
    }

    pub fn unmount(&self) {
        self.poller.stop();
        self.conversations.reset();
    }
}
