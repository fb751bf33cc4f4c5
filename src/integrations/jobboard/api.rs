// src/integrations/jobboard/api.rs
//
// The backend contract, as a trait.
//
// Services depend on `dyn JobBoardApi` so tests can substitute a mock;
// `JobBoardClient` is the HTTP implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{
    ApplicationId, ApplicationUpload, AttachmentKind, Conversation, ConversationId, Credentials,
    DownloadedFile, Interview, InterviewRequest, Job, JobApplication, JobDraft, JobId, Message,
    ProfileUpdate, Registration, User, UserId,
};
use crate::error::AppResult;

/// Body returned by `/api/login` and `/api/register`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,

    #[serde(default)]
    pub token_type: Option<String>,

    pub user: User,
}

/// Source of the bearer token attached to every request.
///
/// Implemented by the session store; the client only ever reads it.
pub trait CredentialProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobBoardApi: Send + Sync {
    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    async fn login(&self, credentials: &Credentials) -> AppResult<AuthResponse>;

    async fn register(&self, registration: &Registration) -> AppResult<AuthResponse>;

    /// Identity behind the current bearer token
    async fn current_user(&self) -> AppResult<User>;

    // ------------------------------------------------------------------
    // Jobs
    // ------------------------------------------------------------------

    async fn list_jobs(&self) -> AppResult<Vec<Job>>;

    async fn get_job(&self, job_id: JobId) -> AppResult<Job>;

    async fn create_job(&self, draft: &JobDraft) -> AppResult<Job>;

    async fn update_job(&self, job_id: JobId, draft: &JobDraft) -> AppResult<Job>;

    async fn apply_to_job(&self, job_id: JobId, upload: &ApplicationUpload) -> AppResult<()>;

    // ------------------------------------------------------------------
    // Applications & interviews
    // ------------------------------------------------------------------

    async fn my_applications(&self) -> AppResult<Vec<JobApplication>>;

    async fn received_applications(&self) -> AppResult<Vec<JobApplication>>;

    async fn get_application(&self, application_id: ApplicationId) -> AppResult<JobApplication>;

    async fn delete_application(&self, application_id: ApplicationId) -> AppResult<()>;

    async fn download_attachment(
        &self,
        application_id: ApplicationId,
        kind: AttachmentKind,
    ) -> AppResult<DownloadedFile>;

    async fn schedule_interview(
        &self,
        application_id: ApplicationId,
        request: &InterviewRequest,
    ) -> AppResult<()>;

    async fn scheduled_interviews(&self) -> AppResult<Vec<Interview>>;

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    async fn list_users(&self) -> AppResult<Vec<User>>;

    async fn get_user(&self, user_id: UserId) -> AppResult<User>;

    async fn update_user(&self, user_id: UserId, update: &ProfileUpdate) -> AppResult<User>;

    async fn posted_jobs(&self, user_id: UserId) -> AppResult<Vec<Job>>;

    /// Returns the backend's confirmation message, if any
    async fn request_employer_role(&self, message: &str) -> AppResult<Option<String>>;

    // ------------------------------------------------------------------
    // Chat
    // ------------------------------------------------------------------

    async fn conversations(&self) -> AppResult<Vec<Conversation>>;

    async fn messages(&self, conversation_id: ConversationId) -> AppResult<Vec<Message>>;

    async fn send_message(&self, conversation_id: ConversationId, body: &str)
        -> AppResult<Message>;
}
