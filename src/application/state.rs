// src/application/state.rs

use std::sync::Arc;

use crate::application::views::*;
use crate::config::AppConfig;
use crate::db::ConnectionPool;
use crate::error::AppResult;
use crate::events::EventBus;
use crate::integrations::{JobBoardApi, JobBoardClient};
use crate::repositories::{SessionRepository, SqliteSessionRepository};
use crate::services::*;

/// Application state managed by Tauri.
/// All fields are Arc-wrapped for thread-safe sharing across commands.
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub event_bus: Arc<EventBus>,
    pub session: Arc<SessionService>,

    pub jobs_list: Arc<JobsListView>,
    pub job_detail: Arc<JobDetailView>,
    pub job_editor: Arc<JobEditorView>,

    pub apply: Arc<ApplyView>,
    pub submitted_applications: Arc<SubmittedApplicationsView>,
    pub received_applications: Arc<ReceivedApplicationsView>,
    pub application_detail: Arc<ApplicationDetailView>,
    pub schedule_interview: Arc<ScheduleInterviewView>,
    pub interview_calendar: Arc<InterviewCalendarView>,

    pub users: Arc<UsersView>,
    pub user_profile: Arc<UserProfileView>,
    pub user_settings: Arc<UserSettingsView>,
    pub saved_jobs: Arc<SavedJobsView>,
    pub user_jobs: Arc<UserJobsView>,
    pub become_employer: Arc<BecomeEmployerView>,

    pub dashboard: Arc<DashboardView>,
    pub chat: Arc<ChatView>,
}

impl AppState {
    /// Wire the HTTP client to the session store, then everything else.
    pub fn build(config: AppConfig, pool: Arc<ConnectionPool>) -> AppResult<Self> {
        config.validate()?;
        let handle = SessionHandle::new();
        let api: Arc<dyn JobBoardApi> =
            Arc::new(JobBoardClient::new(&config, Arc::new(handle.clone()))?);
        let repository: Arc<dyn SessionRepository> = Arc::new(SqliteSessionRepository::new(pool));

        Ok(Self::with_api(config, handle, repository, api))
    }

    pub fn with_api(
        config: AppConfig,
        handle: SessionHandle,
        repository: Arc<dyn SessionRepository>,
        api: Arc<dyn JobBoardApi>,
    ) -> Self {
        let config = Arc::new(config);
        let event_bus = Arc::new(EventBus::new());

        // 1. SESSION
        let session = Arc::new(SessionService::new(
            handle,
            repository,
            Arc::clone(&api),
            Arc::clone(&event_bus),
        ));

        // 2. SERVICES
        let jobs = Arc::new(JobService::new(
            Arc::clone(&api),
            Arc::clone(&session),
            Arc::clone(&event_bus),
            Arc::clone(&config),
        ));
        let applications = Arc::new(ApplicationService::new(
            Arc::clone(&api),
            Arc::clone(&session),
            Arc::clone(&event_bus),
        ));
        let interviews = Arc::new(InterviewService::new(
            Arc::clone(&api),
            Arc::clone(&session),
            Arc::clone(&event_bus),
        ));
        let users = Arc::new(UserService::new(
            Arc::clone(&api),
            Arc::clone(&session),
            Arc::clone(&event_bus),
            Arc::clone(&config),
        ));
        let chat = Arc::new(ChatService::new(
            Arc::clone(&api),
            Arc::clone(&session),
            Arc::clone(&event_bus),
        ));
        let dashboard = Arc::new(DashboardService::new(
            Arc::clone(&session),
            Arc::clone(&jobs),
            Arc::clone(&applications),
        ));

        // 3. VIEWS
        Self {
            jobs_list: Arc::new(JobsListView::new(Arc::clone(&jobs))),
            job_detail: Arc::new(JobDetailView::new(Arc::clone(&jobs))),
            job_editor: Arc::new(JobEditorView::new(Arc::clone(&jobs))),

            apply: Arc::new(ApplyView::new(Arc::clone(&jobs), Arc::clone(&applications))),
            submitted_applications: Arc::new(SubmittedApplicationsView::new(Arc::clone(
                &applications,
            ))),
            received_applications: Arc::new(ReceivedApplicationsView::new(Arc::clone(
                &applications,
            ))),
            application_detail: Arc::new(ApplicationDetailView::new(Arc::clone(&applications))),
            schedule_interview: Arc::new(ScheduleInterviewView::new(Arc::clone(&interviews))),
            interview_calendar: Arc::new(InterviewCalendarView::new(interviews)),

            users: Arc::new(UsersView::new(Arc::clone(&users))),
            user_profile: Arc::new(UserProfileView::new(Arc::clone(&users))),
            user_settings: Arc::new(UserSettingsView::new(Arc::clone(&users))),
            saved_jobs: Arc::new(SavedJobsView::new(Arc::clone(&users))),
            user_jobs: Arc::new(UserJobsView::new(jobs)),
            become_employer: Arc::new(BecomeEmployerView::new(users)),

            dashboard: Arc::new(DashboardView::new(dashboard)),
            chat: Arc::new(ChatView::new(
                chat,
                Arc::clone(&event_bus),
                config.chat_poll_interval(),
            )),

            config,
            event_bus,
            session,
        }
    }

    /// Drop every view's state, e.g. after logout.
    pub fn unmount_all(&self) {
        self.jobs_list.unmount();
        self.job_detail.unmount();
        self.job_editor.unmount();
        self.apply.unmount();
        self.submitted_applications.unmount();
        self.received_applications.unmount();
        self.application_detail.unmount();
        self.schedule_interview.unmount();
        self.interview_calendar.unmount();
        self.users.unmount();
        self.user_profile.unmount();
        self.saved_jobs.unmount();
        self.user_jobs.unmount();
        self.dashboard.unmount();
        self.chat.unmount();
    }
}
