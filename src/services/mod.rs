// src/services/mod.rs
//
// Services Module - Orchestration Layer
//
// Services enforce permissions and client-side validation, call the
// backend through JobBoardApi and publish what happened on the EventBus.

pub mod application_service;
pub mod chat_poller;
pub mod chat_service;
pub mod dashboard_service;
pub mod interview_service;
pub mod job_service;
pub mod session_service;
pub mod user_service;

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
mod application_service_tests;
#[cfg(test)]
mod chat_poller_tests;
#[cfg(test)]
mod user_service_tests;

// Re-export all services and their types
pub use application_service::ApplicationService;

pub use chat_poller::{ChatPoller, MessageWindow, LOAD_MESSAGES_FAILED};

pub use chat_service::ChatService;

pub use dashboard_service::{Dashboard, DashboardService};

pub use interview_service::InterviewService;

pub use job_service::JobService;

pub use session_service::{failure_message, SessionHandle, SessionService};

pub use user_service::{
    filter_users, UserProfile, UserService, ADMIN_REQUIRED_MESSAGE, EMPLOYER_REQUEST_SENT,
};
