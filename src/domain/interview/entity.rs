use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::invariants::parse_scheduled_at;
use crate::domain::application::{ApplicationId, JobApplication};
use crate::domain::DomainResult;

pub type InterviewId = u64;

/// An interview scheduled by an employer for an application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interview {
    pub id: InterviewId,

    pub job_application_id: ApplicationId,

    pub title: String,

    /// Raw backend timestamp; see [`parse_scheduled_at`]
    pub scheduled_at: String,

    /// Embedded on the calendar route, with its job and applicant
    #[serde(default)]
    pub job_application: Option<JobApplication>,
}

impl Interview {
    pub fn scheduled_time(&self) -> DomainResult<NaiveDateTime> {
        parse_scheduled_at(&self.scheduled_at)
    }
}

/// Schedule form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterviewRequest {
    pub title: String,
    pub scheduled_at: String,
}

/// A point-in-time calendar entry built from an [`Interview`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub interview_id: InterviewId,
    pub application_id: ApplicationId,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub applicant_name: Option<String>,
    pub job_title: Option<String>,
}

impl CalendarEvent {
    pub fn from_interview(interview: &Interview) -> DomainResult<Self> {
        let start = interview.scheduled_time()?;
        let application = interview.job_application.as_ref();
        let applicant_name = application
            .and_then(|a| a.user.as_ref())
            .map(|u| u.name.clone());
        let job_title = application
            .and_then(|a| a.job.as_ref())
            .map(|j| j.job_title.clone());

        Ok(Self {
            interview_id: interview.id,
            application_id: interview.job_application_id,
            title: format!(
                "{} - {} for {}",
                interview.title,
                applicant_name.as_deref().unwrap_or("Applicant"),
                job_title.as_deref().unwrap_or("Job"),
            ),
            start,
            end: start,
            applicant_name,
            job_title,
        })
    }
}
