// src/services/job_service.rs
//
// Job Service - browsing, posting and editing job listings
//
// RULES:
// - Permission checks use the session's current user
// - Drafts are validated before any request is sent
// - Every backend result passes through SessionService::intercept

use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::{filter_jobs, validate_job_draft, Job, JobDraft, JobId};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, JobPosted, JobUpdated};
use crate::integrations::JobBoardApi;
use crate::services::session_service::SessionService;

pub struct JobService {
    api: Arc<dyn JobBoardApi>,
    session: Arc<SessionService>,
    event_bus: Arc<EventBus>,
    config: Arc<AppConfig>,
}

impl JobService {
    pub fn new(
        api: Arc<dyn JobBoardApi>,
        session: Arc<SessionService>,
        event_bus: Arc<EventBus>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            api,
            session,
            event_bus,
            config,
        }
    }

    /// Storage-relative logo paths become absolute URLs
    pub fn resolve_logo(&self, mut job: Job) -> Job {
        job.company_logo = job
            .company_logo
            .filter(|path| !path.is_empty())
            .map(|path| self.config.storage_url(&path));
        job
    }

    pub async fn list_jobs(&self) -> AppResult<Vec<Job>> {
        let jobs = self.session.intercept(self.api.list_jobs()).await?;
        Ok(jobs.into_iter().map(|job| self.resolve_logo(job)).collect())
    }

    /// All jobs whose title or category contains `term`
    pub async fn search_jobs(&self, term: &str) -> AppResult<Vec<Job>> {
        let jobs = self.list_jobs().await?;
        Ok(filter_jobs(&jobs, term).into_iter().cloned().collect())
    }

    pub async fn get_job(&self, job_id: JobId) -> AppResult<Job> {
        let job = self.session.intercept(self.api.get_job(job_id)).await?;
        Ok(self.resolve_logo(job))
    }

    pub async fn post_job(&self, draft: JobDraft) -> AppResult<Job> {
        let user = self.session.require_user()?;
        if !user.can_manage_jobs() {
            return Err(AppError::Forbidden(
                "Only employers and admins can post jobs.".to_string(),
            ));
        }
        validate_job_draft(&draft)?;

        let job = self.session.intercept(self.api.create_job(&draft)).await?;
        log::info!("Job {} posted by user {}", job.id, user.id);
        self.event_bus.emit(JobPosted::new(job.id));

        Ok(self.resolve_logo(job))
    }

    /// Load a job for its edit form. Only the owner or an admin may edit.
    pub async fn load_for_edit(&self, job_id: JobId) -> AppResult<Job> {
        let user = self.session.require_user()?;
        let job = self.get_job(job_id).await?;

        if !user.can_edit_job(job.employer_id) {
            return Err(AppError::Forbidden(
                "You do not have permission to edit this job.".to_string(),
            ));
        }
        Ok(job)
    }

    pub async fn update_job(&self, job_id: JobId, draft: JobDraft) -> AppResult<Job> {
        self.load_for_edit(job_id).await?;
        validate_job_draft(&draft)?;

        let job = self
            .session
            .intercept(self.api.update_job(job_id, &draft)).await?;
        log::info!("Job {} updated", job_id);
        self.event_bus.emit(JobUpdated::new(job_id));

        Ok(self.resolve_logo(job))
    }

    /// Jobs posted by the current user
    pub async fn posted_jobs(&self) -> AppResult<Vec<Job>> {
        let user = self.session.require_user()?;
        let jobs = self
            .session
            .intercept(self.api.posted_jobs(user.id)).await?;
        Ok(jobs.into_iter().map(|job| self.resolve_logo(job)).collect())
    }
}
