// src/integrations/jobboard/client.rs
//
// REST client for the job-board backend.
//
// ARCHITECTURE:
// - One reqwest::Client per process, built from AppConfig
// - The bearer token is read from the CredentialProvider on EVERY request,
//   so a login or logout takes effect without rebuilding the client
// - Non-2xx responses are classified into AppError (see errors.rs)
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE: it never writes session state
// - Wire shapes are the domain entities themselves (snake_case JSON)

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use super::api::{AuthResponse, CredentialProvider, JobBoardApi};
use super::download::filename_from_disposition;
use super::errors::{classify, extract_auth_error};
use crate::config::AppConfig;
use crate::domain::{
    ApplicationId, ApplicationUpload, Attachment, AttachmentKind, Conversation, ConversationId,
    Credentials, DownloadedFile, Interview, InterviewRequest, Job, JobApplication, JobDraft, JobId,
    Message, ProfileUpdate, Registration, User, UserId,
};
use crate::error::{AppError, AppResult};

/// `{"message": "..."}` acknowledgement bodies
#[derive(Debug, Deserialize)]
struct Acknowledgement {
    #[serde(default)]
    message: Option<String>,
}

pub struct JobBoardClient {
    api_root: String,
    http_client: Client,
    credentials: Arc<dyn CredentialProvider>,
}

impl JobBoardClient {
    pub fn new(config: &AppConfig, credentials: Arc<dyn CredentialProvider>) -> AppResult<Self> {
        let http_client = Client::builder().timeout(config.request_timeout()).build()?;

        Ok(Self {
            api_root: config.api_root(),
            http_client,
            credentials,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_root, path.trim_start_matches('/'))
    }

    /// Attach `Authorization: Bearer <token>` while a token exists.
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.credentials.bearer_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// JSON request against an API path
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http_client
            .request(method, self.url(path))
            .header(header::ACCEPT, "application/json");
        self.authorize(builder)
    }

    // ========================================================================
    // INTERNAL: Execution
    // ========================================================================

    async fn send(&self, builder: RequestBuilder) -> AppResult<Response> {
        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().path().to_string();
        let body = response.text().await.unwrap_or_default();
        log::warn!("{} answered {}", url, status);
        Err(classify(status, &body))
    }

    async fn send_json<T>(&self, builder: RequestBuilder) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self.send(builder).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn send_empty(&self, builder: RequestBuilder) -> AppResult<()> {
        self.send(builder).await?;
        Ok(())
    }

    /// Login and register report a rejected credential as `Api` carrying
    /// the backend's reason, never as `Unauthorized`.
    async fn send_auth(&self, builder: RequestBuilder, fallback: &str) -> AppResult<AuthResponse> {
        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            let bytes = response.bytes().await?;
            return Ok(serde_json::from_slice(&bytes)?);
        }

        let body = response.text().await.unwrap_or_default();
        log::info!("Authentication rejected with {}", status);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::BAD_REQUEST => Err(AppError::Api {
                status: status.as_u16(),
                message: extract_auth_error(&body).unwrap_or_else(|| fallback.to_string()),
            }),
            _ => Err(classify(status, &body)),
        }
    }

    fn file_part(attachment: &Attachment) -> AppResult<Part> {
        let part = Part::bytes(attachment.bytes.clone()).file_name(attachment.file_name.clone());
        match &attachment.mime_type {
            Some(mime) => Ok(part.mime_str(mime)?),
            None => Ok(part),
        }
    }

    fn job_form(draft: &JobDraft) -> AppResult<Form> {
        let mut form = Form::new();
        for (field, value) in draft.text_fields() {
            form = form.text(field, value);
        }
        if let Some(logo) = &draft.company_logo {
            form = form.part("company_logo", Self::file_part(logo)?);
        }
        Ok(form)
    }

    fn application_form(upload: &ApplicationUpload) -> AppResult<Form> {
        let mut form = Form::new();
        if let Some(resume) = &upload.resume {
            form = form.part(
                AttachmentKind::Resume.form_field(),
                Self::file_part(resume)?,
            );
        }
        if let Some(letter) = &upload.cover_letter {
            form = form.part(
                AttachmentKind::CoverLetter.form_field(),
                Self::file_part(letter)?,
            );
        }
        Ok(form)
    }

    fn profile_form(update: &ProfileUpdate) -> AppResult<Form> {
        let mut form = Form::new()
            .text("name", update.name.clone())
            .text("description", update.description.clone());
        if let Some(photo) = &update.profile_photo {
            form = form.part("profile_photo", Self::file_part(photo)?);
        }
        Ok(form)
    }
}

#[async_trait]
impl JobBoardApi for JobBoardClient {
    async fn login(&self, credentials: &Credentials) -> AppResult<AuthResponse> {
        let builder = self.request(Method::POST, "login").json(&json!({
            "email": credentials.email,
            "password": credentials.password,
        }));
        self.send_auth(builder, "Login failed").await
    }

    async fn register(&self, registration: &Registration) -> AppResult<AuthResponse> {
        let builder = self.request(Method::POST, "register").json(registration);
        self.send_auth(builder, "Registration failed").await
    }

    async fn current_user(&self) -> AppResult<User> {
        self.send_json(self.request(Method::GET, "user")).await
    }

    async fn list_jobs(&self) -> AppResult<Vec<Job>> {
        self.send_json(self.request(Method::GET, "jobs")).await
    }

    async fn get_job(&self, job_id: JobId) -> AppResult<Job> {
        self.send_json(self.request(Method::GET, &format!("jobs/{}", job_id)))
            .await
    }

    async fn create_job(&self, draft: &JobDraft) -> AppResult<Job> {
        let form = Self::job_form(draft)?;
        self.send_json(self.request(Method::POST, "jobs").multipart(form))
            .await
    }

    async fn update_job(&self, job_id: JobId, draft: &JobDraft) -> AppResult<Job> {
        // Multipart bodies go over POST; the backend routes it as an update
        let form = Self::job_form(draft)?;
        self.send_json(
            self.request(Method::POST, &format!("jobs/{}", job_id))
                .multipart(form),
        )
        .await
    }

    async fn apply_to_job(&self, job_id: JobId, upload: &ApplicationUpload) -> AppResult<()> {
        let form = Self::application_form(upload)?;
        self.send_empty(
            self.request(Method::POST, &format!("jobs/{}/apply", job_id))
                .multipart(form),
        )
        .await
    }

    async fn my_applications(&self) -> AppResult<Vec<JobApplication>> {
        self.send_json(self.request(Method::GET, "my-applications"))
            .await
    }

    async fn received_applications(&self) -> AppResult<Vec<JobApplication>> {
        self.send_json(self.request(Method::GET, "applications/received"))
            .await
    }

    async fn get_application(&self, application_id: ApplicationId) -> AppResult<JobApplication> {
        self.send_json(self.request(Method::GET, &format!("applications/{}", application_id)))
            .await
    }

    async fn delete_application(&self, application_id: ApplicationId) -> AppResult<()> {
        self.send_empty(self.request(Method::DELETE, &format!("applications/{}", application_id)))
            .await
    }

    async fn download_attachment(
        &self,
        application_id: ApplicationId,
        kind: AttachmentKind,
    ) -> AppResult<DownloadedFile> {
        let url = self.url(&format!(
            "applications/{}/{}",
            application_id,
            kind.path_segment()
        ));
        let response = self.send(self.authorize(self.http_client.get(url))).await?;

        let headers = response.headers();
        let file_name = headers
            .get(header::CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(filename_from_disposition)
            .unwrap_or_else(|| DownloadedFile::fallback_name(kind, application_id));
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let bytes = response.bytes().await?.to_vec();
        log::debug!("Downloaded {} ({} bytes)", file_name, bytes.len());

        Ok(DownloadedFile {
            file_name,
            content_type,
            bytes,
        })
    }

    async fn schedule_interview(
        &self,
        application_id: ApplicationId,
        request: &InterviewRequest,
    ) -> AppResult<()> {
        self.send_empty(
            self.request(
                Method::POST,
                &format!("applications/{}/schedule-interview", application_id),
            )
            .json(request),
        )
        .await
    }

    async fn scheduled_interviews(&self) -> AppResult<Vec<Interview>> {
        self.send_json(self.request(Method::GET, "interviews/scheduled"))
            .await
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.send_json(self.request(Method::GET, "users")).await
    }

    async fn get_user(&self, user_id: UserId) -> AppResult<User> {
        self.send_json(self.request(Method::GET, &format!("users/{}", user_id)))
            .await
    }

    async fn update_user(&self, user_id: UserId, update: &ProfileUpdate) -> AppResult<User> {
        let form = Self::profile_form(update)?;
        self.send_json(
            self.request(Method::POST, &format!("users/{}", user_id))
                .multipart(form),
        )
        .await
    }

    async fn posted_jobs(&self, user_id: UserId) -> AppResult<Vec<Job>> {
        self.send_json(self.request(Method::GET, &format!("users/{}/posted-jobs", user_id)))
            .await
    }

    async fn request_employer_role(&self, message: &str) -> AppResult<Option<String>> {
        let response = self
            .send(
                self.request(Method::POST, "request-employer-role")
                    .json(&json!({ "message": message })),
            )
            .await?;

        // An empty or non-JSON success body is still a success
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice::<Acknowledgement>(&bytes)
            .ok()
            .and_then(|ack| ack.message))
    }

    async fn conversations(&self) -> AppResult<Vec<Conversation>> {
        self.send_json(self.request(Method::GET, "conversations"))
            .await
    }

    async fn messages(&self, conversation_id: ConversationId) -> AppResult<Vec<Message>> {
        self.send_json(self.request(
            Method::GET,
            &format!("conversations/{}/messages", conversation_id),
        ))
        .await
    }

    async fn send_message(
        &self,
        conversation_id: ConversationId,
        body: &str,
    ) -> AppResult<Message> {
        self.send_json(
            self.request(
                Method::POST,
                &format!("conversations/{}/messages", conversation_id),
            )
            .json(&json!({ "body": body })),
        )
        .await
    }
}
