// src/application/views/jobs.rs
//
// Job listing, job detail, and the post/edit form.

use std::sync::Arc;

use crate::application::view_error::{ErrorCopy, ViewError};
use crate::application::view_state::{ViewSlot, ViewState};
use crate::application::views::{load_into, settle};
use crate::domain::{filter_jobs, Job, JobDraft, JobId};
use crate::services::JobService;

const LIST_COPY: ErrorCopy = ErrorCopy::new("Failed to load jobs. Please try again later.");

const DETAIL_COPY: ErrorCopy =
    ErrorCopy::new("Failed to load job details.").not_found("Job not found.");

const EDIT_LOAD_COPY: ErrorCopy = ErrorCopy::new("Failed to load job data. The job may not exist.")
    .not_found("Failed to load job data. The job may not exist.")
    .forbidden("You do not have permission to edit this job.");

const EDIT_SAVE_COPY: ErrorCopy = ErrorCopy::new("Failed to update job. Please try again.")
    .forbidden("You do not have permission to edit this job.")
    .validation_prefix("Validation failed");

const POST_COPY: ErrorCopy =
    ErrorCopy::new("Failed to post job. Please try again.").validation_prefix("Validation failed");

pub struct JobsListView {
    jobs: Arc<JobService>,
    slot: ViewSlot<(), Vec<Job>>,
}

impl JobsListView {
    pub fn new(jobs: Arc<JobService>) -> Self {
        Self {
            jobs,
            slot: ViewSlot::new(),
        }
    }

    pub async fn load(&self) -> ViewState<Vec<Job>> {
        load_into(&self.slot, (), &LIST_COPY, self.jobs.list_jobs()).await
    }

    /// Loaded jobs narrowed to those whose title or category contains
    /// `term`. Filtering is local; no request is made.
    pub fn search(&self, term: &str) -> ViewState<Vec<Job>> {
        self.slot
            .state()
            .map(|jobs| filter_jobs(&jobs, term).into_iter().cloned().collect())
    }

    pub fn unmount(&self) {
        self.slot.reset();
    }
}

/// Keyed by job id: opening another job discards the previous fetch.
pub struct JobDetailView {
    jobs: Arc<JobService>,
    slot: ViewSlot<JobId, Job>,
}

impl JobDetailView {
    pub fn new(jobs: Arc<JobService>) -> Self {
        Self {
            jobs,
            slot: ViewSlot::new(),
        }
    }

    pub async fn open(&self, job_id: JobId) -> ViewState<Job> {
        load_into(&self.slot, job_id, &DETAIL_COPY, self.jobs.get_job(job_id)).await
    }

    pub fn state(&self) -> ViewState<Job> {
        self.slot.state()
    }

    pub fn unmount(&self) {
        self.slot.reset();
    }
}

/// Post a new job, or load and save an existing one.
pub struct JobEditorView {
    jobs: Arc<JobService>,
    editing: ViewSlot<JobId, Job>,
}

impl JobEditorView {
    pub fn new(jobs: Arc<JobService>) -> Self {
        Self {
            jobs,
            editing: ViewSlot::new(),
        }
    }

    pub async fn post(&self, draft: JobDraft) -> Result<Job, ViewError> {
        settle(self.jobs.post_job(draft).await, &POST_COPY)
    }

    /// Load a job for editing. Only its owner or an admin gets the form.
    pub async fn open(&self, job_id: JobId) -> ViewState<Job> {
        load_into(
            &self.editing,
            job_id,
            &EDIT_LOAD_COPY,
            self.jobs.load_for_edit(job_id),
        )
        .await
    }

    pub async fn save(&self, job_id: JobId, draft: JobDraft) -> Result<Job, ViewError> {
        let job = settle(self.jobs.update_job(job_id, draft).await, &EDIT_SAVE_COPY)?;
        // Keep the form in sync if it still shows this job
        if self.editing.key() == Some(job_id) {
            let fresh = job.clone();
            self.editing.update(move |current| *current = fresh);
        }
        Ok(job)
    }

    pub fn unmount(&self) {
        self.editing.reset();
    }
}
