// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// Entities mirror the backend's JSON shapes (snake_case, integer ids).
// Invariants here are the client-side checks run before a request is sent.

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod application;
pub mod conversation;
pub mod interview;
pub mod job;
pub mod session;
pub mod user;

mod serde_helpers;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// User Domain
pub use user::{
    validate_credentials, validate_profile_update, validate_registration, Credentials,
    ProfileUpdate, Registration, User, UserId,
};

// Job Domain
pub use job::{filter_jobs, validate_job_draft, Job, JobDraft, JobId, JobType};

// Application Domain
pub use application::{
    validate_application_upload, ApplicationId, ApplicationUpload, AttachmentKind, Attachment,
    DownloadedFile, JobApplication,
};

// Conversation Domain
pub use conversation::{
    validate_message_body, Conversation, ConversationId, Message, MessageId,
};

// Interview Domain
pub use interview::{
    parse_scheduled_at, validate_interview_request, CalendarEvent, Interview, InterviewId,
    InterviewRequest,
};

// Session Domain
pub use session::{validate_session, Session};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

impl DomainError {
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        DomainError::InvalidField {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
