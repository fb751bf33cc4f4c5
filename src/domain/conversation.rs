// src/domain/conversation.rs
//
// Conversation and Message Entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::user::{User, UserId};
use crate::domain::{DomainError, DomainResult};

pub type ConversationId = u64;
pub type MessageId = u64;

/// A chat thread. `users` lists the *other* participants; the backend
/// filters out the requesting user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,

    #[serde(default)]
    pub users: Vec<User>,

    #[serde(default)]
    pub latest_message: Option<Message>,
}

impl Conversation {
    pub fn participant_name(&self) -> &str {
        self.users
            .first()
            .map(|u| u.name.as_str())
            .unwrap_or("Unknown User")
    }

    pub fn preview(&self) -> &str {
        self.latest_message
            .as_ref()
            .map(|m| m.body.as_str())
            .unwrap_or("No messages yet...")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,

    #[serde(default)]
    pub conversation_id: Option<ConversationId>,

    /// Sender
    pub user_id: UserId,

    pub body: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub user: Option<User>,
}

impl Message {
    pub fn is_from(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    pub fn sender_name(&self) -> &str {
        self.user.as_ref().map(|u| u.name.as_str()).unwrap_or("")
    }
}

/// Blank messages are never sent
pub fn validate_message_body(body: &str) -> DomainResult<()> {
    if body.trim().is_empty() {
        return Err(DomainError::field("body", "Message cannot be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_message_rejected() {
        assert!(validate_message_body("   \n").is_err());
        assert!(validate_message_body("hi").is_ok());
    }

    #[test]
    fn test_conversation_fallbacks() {
        let convo: Conversation = serde_json::from_str(r#"{"id": 1, "users": []}"#).unwrap();
        assert_eq!(convo.participant_name(), "Unknown User");
        assert_eq!(convo.preview(), "No messages yet...");
    }
}
