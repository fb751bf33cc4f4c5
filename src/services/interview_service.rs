// src/services/interview_service.rs
//
// Interview Service - scheduling and the interview calendar

use std::sync::Arc;

use crate::domain::{
    validate_interview_request, ApplicationId, CalendarEvent, InterviewRequest, JobApplication,
};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, InterviewScheduled};
use crate::integrations::JobBoardApi;
use crate::services::session_service::SessionService;

pub struct InterviewService {
    api: Arc<dyn JobBoardApi>,
    session: Arc<SessionService>,
    event_bus: Arc<EventBus>,
}

impl InterviewService {
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

    /// The application an interview is being scheduled for. Only admins
    /// and the owner of the application's job may schedule.
    pub async fn load_for_scheduling(
        &self,
        application_id: ApplicationId,
    ) -> AppResult<JobApplication> {
        let user = self.session.require_user()?;
        let application = self
            .session
            .intercept(self.api.get_application(application_id)).await?;

        if !application.can_be_managed_by(&user) {
            return Err(AppError::Forbidden(
                "You do not have permission to schedule an interview for this application."
                    .to_string(),
            ));
        }
        Ok(application)
    }

    pub async fn schedule(
        &self,
        application_id: ApplicationId,
        request: InterviewRequest,
    ) -> AppResult<()> {
        self.session.require_user()?;
        validate_interview_request(&request)?;

        self.session
            .intercept(self.api.schedule_interview(application_id, &request)).await?;
        log::info!("Interview scheduled for application {}", application_id);
        self.event_bus
            .emit(InterviewScheduled::new(application_id, request.title));
        Ok(())
    }

    /// Scheduled interviews as calendar entries. Entries whose timestamp
    /// does not parse are left off the calendar.
    pub async fn calendar(&self) -> AppResult<Vec<CalendarEvent>> {
        self.session.require_user()?;
        let interviews = self
            .session
            .intercept(self.api.scheduled_interviews()).await?;

        let events = interviews
            .iter()
            .filter_map(|interview| match CalendarEvent::from_interview(interview) {
                Ok(event) => Some(event),
                Err(e) => {
                    log::warn!("Skipping interview {}: {}", interview.id, e);
                    None
                }
            })
            .collect();

        Ok(events)
    }
}
