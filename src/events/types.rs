// src/events/types.rs
//
// All events published by the client core.
// Each event represents an immutable fact that has already occurred.
//
// RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{ApplicationId, ConversationId, JobId, Message, MessageId, UserId};

/// Trait that all events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($ty:ident) => {
        impl DomainEvent for $ty {
            fn event_id(&self) -> Uuid { self.event_id }
            fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
            fn event_type(&self) -> &'static str { stringify!($ty) }
        }
    };
}

// ============================================================================
// SESSION EVENTS
// ============================================================================

/// How a session came to be established
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOrigin {
    Login,
    Register,
    Revalidation,
}

/// Why a session was cleared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionClearReason {
    /// The user logged out
    Logout,
    /// The persisted token failed revalidation at startup
    RevalidationFailed,
    /// A request was answered with 401
    Unauthorized,
}

/// Emitted when a token and identity become current
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEstablished {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: UserId,
    pub origin: SessionOrigin,
}

impl SessionEstablished {
    pub fn new(user_id: UserId, origin: SessionOrigin) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
            origin,
        }
    }
}

impl_domain_event!(SessionEstablished);

/// Emitted when the session returns to logged-out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCleared {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub previous_user_id: Option<UserId>,
    pub reason: SessionClearReason,
}

impl SessionCleared {
    pub fn new(previous_user_id: Option<UserId>, reason: SessionClearReason) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            previous_user_id,
            reason,
        }
    }
}

impl_domain_event!(SessionCleared);

// ============================================================================
// JOB EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub job_id: JobId,
}

impl JobPosted {
    pub fn new(job_id: JobId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            job_id,
        }
    }
}

impl_domain_event!(JobPosted);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub job_id: JobId,
}

impl JobUpdated {
    pub fn new(job_id: JobId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            job_id,
        }
    }
}

impl_domain_event!(JobUpdated);

// ============================================================================
// APPLICATION EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationSubmitted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub job_id: JobId,
}

impl ApplicationSubmitted {
    pub fn new(job_id: JobId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            job_id,
        }
    }
}

impl_domain_event!(ApplicationSubmitted);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub application_id: ApplicationId,
}

impl ApplicationDeleted {
    pub fn new(application_id: ApplicationId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            application_id,
        }
    }
}

impl_domain_event!(ApplicationDeleted);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewScheduled {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub application_id: ApplicationId,
    pub title: String,
}

impl InterviewScheduled {
    pub fn new(application_id: ApplicationId, title: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            application_id,
            title,
        }
    }
}

impl_domain_event!(InterviewScheduled);

// ============================================================================
// USER EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: UserId,
}

impl ProfileUpdated {
    pub fn new(user_id: UserId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
        }
    }
}

impl_domain_event!(ProfileUpdated);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployerRoleRequested {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: UserId,
}

impl EmployerRoleRequested {
    pub fn new(user_id: UserId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
        }
    }
}

impl_domain_event!(EmployerRoleRequested);

// ============================================================================
// CHAT EVENTS
// ============================================================================

/// Emitted after a message was accepted by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSent {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub conversation_id: ConversationId,
    pub message_id: MessageId,
}

impl MessageSent {
    pub fn new(conversation_id: ConversationId, message_id: MessageId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            conversation_id,
            message_id,
        }
    }
}

impl_domain_event!(MessageSent);

/// Emitted by the chat poller each time a fetch for the *current*
/// selection completes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesRefreshed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub conversation_id: ConversationId,
    pub messages: Vec<Message>,
}

impl MessagesRefreshed {
    pub fn new(conversation_id: ConversationId, messages: Vec<Message>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            conversation_id,
            messages,
        }
    }
}

impl_domain_event!(MessagesRefreshed);

/// Emitted when a poll fetch fails; polling continues
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatPollFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub conversation_id: ConversationId,
    pub message: String,
}

impl ChatPollFailed {
    pub fn new(conversation_id: ConversationId, message: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            conversation_id,
            message,
        }
    }
}

impl_domain_event!(ChatPollFailed);
