// src/application/views/applications.rs
//
// Applying, reviewing applications, and interviews.

use std::sync::Arc;

use crate::application::view_error::{ErrorCopy, ViewError};
use crate::application::view_state::{ViewSlot, ViewState};
use crate::application::views::{load_into, settle};
use crate::domain::{
    ApplicationId, ApplicationUpload, AttachmentKind, CalendarEvent, DownloadedFile,
    InterviewRequest, Job, JobApplication, JobId,
};
use crate::services::{ApplicationService, InterviewService, JobService};

const APPLY_JOB_COPY: ErrorCopy =
    ErrorCopy::new("Could not load job information. Please go back and try again.");

const APPLY_COPY: ErrorCopy = ErrorCopy::new("Failed to submit application. Please try again.")
    .conflict("You have already applied for this job.")
    .validation_prefix("Submission failed");

const SUBMITTED_COPY: ErrorCopy = ErrorCopy::new("Failed to load your applications.");

const WITHDRAW_COPY: ErrorCopy = ErrorCopy::new("Failed to withdraw application. Please try again.");

const RECEIVED_COPY: ErrorCopy = ErrorCopy::new("Failed to load received applications.");

const DETAIL_COPY: ErrorCopy = ErrorCopy::new("Failed to load application details.")
    .not_found("Application not found.")
    .forbidden("You do not have permission to view this application.");

const DOWNLOAD_COPY: ErrorCopy =
    ErrorCopy::new("Failed to download file. Please try again.").not_found("File not found.");

const DELETE_COPY: ErrorCopy = ErrorCopy::new("Failed to delete application. Please try again.")
    .not_found("Application not found (it may have already been deleted).")
    .forbidden("You do not have permission to delete this application.");

const SCHEDULE_LOAD_COPY: ErrorCopy = ErrorCopy::new("Failed to load application details.")
    .not_found("Application not found.");

const SCHEDULE_COPY: ErrorCopy = ErrorCopy::new("Failed to schedule interview. Please try again.")
    .forbidden("You do not have permission to perform this action.")
    .validation_prefix("Scheduling failed");

const CALENDAR_COPY: ErrorCopy = ErrorCopy::new("Failed to load scheduled interviews.");

// ============================================================================
// APPLY
// ============================================================================

pub struct ApplyView {
    jobs: Arc<JobService>,
    applications: Arc<ApplicationService>,
    job: ViewSlot<JobId, Job>,
}

impl ApplyView {
    pub fn new(jobs: Arc<JobService>, applications: Arc<ApplicationService>) -> Self {
        Self {
            jobs,
            applications,
            job: ViewSlot::new(),
        }
    }

    /// The job being applied for, shown above the form
    pub async fn open(&self, job_id: JobId) -> ViewState<Job> {
        load_into(&self.job, job_id, &APPLY_JOB_COPY, self.jobs.get_job(job_id)).await
    }

    pub async fn submit(&self, job_id: JobId, upload: ApplicationUpload) -> Result<(), ViewError> {
        settle(self.applications.apply(job_id, upload).await, &APPLY_COPY)
    }

    pub fn unmount(&self) {
        self.job.reset();
    }
}

// ============================================================================
// LISTS
// ============================================================================

/// The applicant's own submissions
pub struct SubmittedApplicationsView {
    applications: Arc<ApplicationService>,
    slot: ViewSlot<(), Vec<JobApplication>>,
}

impl SubmittedApplicationsView {
    pub fn new(applications: Arc<ApplicationService>) -> Self {
        Self {
            applications,
            slot: ViewSlot::new(),
        }
    }

    pub async fn load(&self) -> ViewState<Vec<JobApplication>> {
        load_into(
            &self.slot,
            (),
            &SUBMITTED_COPY,
            self.applications.my_applications(),
        )
        .await
    }

    pub fn state(&self) -> ViewState<Vec<JobApplication>> {
        self.slot.state()
    }

    /// Withdraw one application and drop it from the loaded list.
    pub async fn withdraw(&self, application_id: ApplicationId) -> Result<(), ViewError> {
        settle(
            self.applications.delete_application(application_id).await,
            &WITHDRAW_COPY,
        )?;
        self.slot
            .update(|list| list.retain(|app| app.id != application_id));
        Ok(())
    }

    pub fn unmount(&self) {
        self.slot.reset();
    }
}

/// Applications to the employer's jobs
pub struct ReceivedApplicationsView {
    applications: Arc<ApplicationService>,
    slot: ViewSlot<(), Vec<JobApplication>>,
}

impl ReceivedApplicationsView {
    pub fn new(applications: Arc<ApplicationService>) -> Self {
        Self {
            applications,
            slot: ViewSlot::new(),
        }
    }

    pub async fn load(&self) -> ViewState<Vec<JobApplication>> {
        load_into(
            &self.slot,
            (),
            &RECEIVED_COPY,
            self.applications.received_applications(),
        )
        .await
    }

    pub fn unmount(&self) {
        self.slot.reset();
    }
}

// ============================================================================
// DETAIL
// ============================================================================

pub struct ApplicationDetailView {
    applications: Arc<ApplicationService>,
    slot: ViewSlot<ApplicationId, JobApplication>,
}

impl ApplicationDetailView {
    pub fn new(applications: Arc<ApplicationService>) -> Self {
        Self {
            applications,
            slot: ViewSlot::new(),
        }
    }

    pub async fn open(&self, application_id: ApplicationId) -> ViewState<JobApplication> {
        load_into(
            &self.slot,
            application_id,
            &DETAIL_COPY,
            self.applications.get_application(application_id),
        )
        .await
    }

    pub fn state(&self) -> ViewState<JobApplication> {
        self.slot.state()
    }

    pub async fn download(
        &self,
        application_id: ApplicationId,
        kind: AttachmentKind,
    ) -> Result<DownloadedFile, ViewError> {
        settle(
            self.applications
                .download_attachment(application_id, kind)
                .await,
            &DOWNLOAD_COPY,
        )
    }

    /// Delete the application. The view is left empty afterwards.
    pub async fn delete(&self, application_id: ApplicationId) -> Result<(), ViewError> {
        settle(
            self.applications.delete_application(application_id).await,
            &DELETE_COPY,
        )?;
        if self.slot.key() == Some(application_id) {
            self.slot.reset();
        }
        Ok(())
    }

    pub fn unmount(&self) {
        self.slot.reset();
    }
}

// ============================================================================
// INTERVIEWS
// ============================================================================

pub struct ScheduleInterviewView {
    interviews: Arc<InterviewService>,
    slot: ViewSlot<ApplicationId, JobApplication>,
}

impl ScheduleInterviewView {
    pub fn new(interviews: Arc<InterviewService>) -> Self {
        Self {
            interviews,
            slot: ViewSlot::new(),
        }
    }

    /// Load the application; the form is only offered to the job's owner
    /// or an admin.
    pub async fn open(&self, application_id: ApplicationId) -> ViewState<JobApplication> {
        load_into(
            &self.slot,
            application_id,
            &SCHEDULE_LOAD_COPY,
            self.interviews.load_for_scheduling(application_id),
        )
        .await
    }

    pub async fn submit(
        &self,
        application_id: ApplicationId,
        request: InterviewRequest,
    ) -> Result<(), ViewError> {
        settle(
            self.interviews.schedule(application_id, request).await,
            &SCHEDULE_COPY,
        )
    }

    pub fn unmount(&self) {
        self.slot.reset();
    }
}

pub struct InterviewCalendarView {
    interviews: Arc<InterviewService>,
    slot: ViewSlot<(), Vec<CalendarEvent>>,
}

impl InterviewCalendarView {
    pub fn new(interviews: Arc<InterviewService>) -> Self {
        Self {
            interviews,
            slot: ViewSlot::new(),
        }
    }

    pub async fn load(&self) -> ViewState<Vec<CalendarEvent>> {
        load_into(&self.slot, (), &CALENDAR_COPY, self.interviews.calendar()).await
    }

    pub fn unmount(&self) {
        self.slot.reset();
    }
}
