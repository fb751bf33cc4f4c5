// src/services/application_service.rs
//
// Application Service - submitting, reviewing and withdrawing applications

use std::sync::Arc;

use crate::domain::{
    validate_application_upload, ApplicationId, ApplicationUpload, AttachmentKind,
    DownloadedFile, JobApplication, JobId,
};
use crate::error::{AppError, AppResult};
use crate::events::{ApplicationDeleted, ApplicationSubmitted, EventBus};
use crate::integrations::JobBoardApi;
use crate::services::session_service::SessionService;

pub struct ApplicationService {
    api: Arc<dyn JobBoardApi>,
    session: Arc<SessionService>,
    event_bus: Arc<EventBus>,
}

impl ApplicationService {
    pub fn new(
        api: Arc<dyn JobBoardApi>,
        session: Arc<SessionService>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            api,
            session,
            event_bus,
        }
    }

    pub async fn apply(&self, job_id: JobId, upload: ApplicationUpload) -> AppResult<()> {
        self.session.require_user()?;
        validate_application_upload(&upload)?;

        self.session
            .intercept(self.api.apply_to_job(job_id, &upload)).await?;
        log::info!("Application submitted for job {}", job_id);
        self.event_bus.emit(ApplicationSubmitted::new(job_id));
        Ok(())
    }

    /// Applications the current user has submitted
    pub async fn my_applications(&self) -> AppResult<Vec<JobApplication>> {
        self.session.require_user()?;
        self.session.intercept(self.api.my_applications()).await
    }

    /// Applications to jobs the current user posted
    pub async fn received_applications(&self) -> AppResult<Vec<JobApplication>> {
        let user = self.session.require_user()?;
        if !user.can_manage_jobs() {
            return Err(AppError::Forbidden(
                "Only employers and admins can review applications.".to_string(),
            ));
        }
        self.session
            .intercept(self.api.received_applications()).await
    }

    /// Visible to the applicant, the job's owner and admins.
    pub async fn get_application(
        &self,
        application_id: ApplicationId,
    ) -> AppResult<JobApplication> {
        let user = self.session.require_user()?;
        let application = self
            .session
            .intercept(self.api.get_application(application_id)).await?;

        if application.user_id != user.id && !application.can_be_managed_by(&user) {
            return Err(AppError::Forbidden(
                "You do not have permission to view this application.".to_string(),
            ));
        }
        Ok(application)
    }

    pub async fn download_attachment(
        &self,
        application_id: ApplicationId,
        kind: AttachmentKind,
    ) -> AppResult<DownloadedFile> {
        self.session.require_user()?;
        self.session
            .intercept(self.api.download_attachment(application_id, kind)).await
    }

    /// Withdraw (applicant) or discard (employer) an application
    pub async fn delete_application(&self, application_id: ApplicationId) -> AppResult<()> {
        self.session.require_user()?;
        self.session
            .intercept(self.api.delete_application(application_id)).await?;
        log::info!("Application {} deleted", application_id);
        self.event_bus.emit(ApplicationDeleted::new(application_id));
        Ok(())
    }
}
