// src/lib.rs
// Jobboard - desktop client core for the job board backend
//
// Architecture:
// - Domain-centric: entities and client-side validation live in domain
// - Event-driven: services report what happened through the EventBus
// - Explicit: every backend call goes through JobBoardApi
// - Application Layer: per-screen view state and the Tauri command boundary

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    Conversation, ConversationId, Credentials, Interview, InterviewRequest, Job, JobApplication,
    JobDraft, JobId, JobType, Message, Registration, Session, User, UserId,
};

// ============================================================================
// PUBLIC API - Errors & Configuration
// ============================================================================

pub use config::AppConfig;
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus, ChatPollFailed, DomainEvent, EventBus, MessageSent, MessagesRefreshed,
    SessionCleared, SessionEstablished,
};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, get_database_path, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{ChatPoller, MessageWindow, SessionHandle, SessionService};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, ErrorResponse, ViewError, ViewState};

#[cfg(feature = "desktop")]
pub use application::commands;

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{JobBoardApi, JobBoardClient};
