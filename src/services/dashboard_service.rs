// src/services/dashboard_service.rs
//
// Dashboard Service - the employer overview

use std::sync::Arc;

use serde::Serialize;

use crate::domain::{Job, JobApplication};
use crate::error::{AppError, AppResult};
use crate::services::application_service::ApplicationService;
use crate::services::job_service::JobService;
use crate::services::session_service::SessionService;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub posted_jobs: Vec<Job>,
    pub received_applications: Vec<JobApplication>,
}

pub struct DashboardService {
    session: Arc<SessionService>,
    jobs: Arc<JobService>,
    applications: Arc<ApplicationService>,
}

impl DashboardService {
    pub fn new(
        session: Arc<SessionService>,
        jobs: Arc<JobService>,
        applications: Arc<ApplicationService>,
    ) -> Self {
        Self {
            session,
            jobs,
            applications,
        }
    }

    /// Posted jobs and received applications, fetched concurrently.
    pub async fn load(&self) -> AppResult<Dashboard> {
        let user = self.session.require_user()?;
        if !user.can_manage_jobs() {
            return Err(AppError::Forbidden(
                "The dashboard is available to employers and admins.".to_string(),
            ));
        }

        let (posted_jobs, received_applications) = tokio::join!(
            self.jobs.posted_jobs(),
            self.applications.received_applications()
        );

        Ok(Dashboard {
            posted_jobs: posted_jobs?,
            received_applications: received_applications?,
        })
    }
}
