// src/application/views/mod.rs
//
// Routed views
//
// RULES:
// - A view owns its fetch state (ViewSlot) and nothing else
// - Guards and permissions live in the services; views only translate
//   failures into ViewError with their own wording
// - unmount() resets every slot so late results are dropped

use std::future::Future;

use crate::application::view_error::{ErrorCopy, ViewError};
use crate::application::view_state::{ViewSlot, ViewState};
use crate::error::AppResult;

pub mod applications;
pub mod chat;
pub mod dashboard;
pub mod jobs;
pub mod users;


pub use applications::{
    ApplicationDetailView, ApplyView, InterviewCalendarView, ReceivedApplicationsView,
    ScheduleInterviewView, SubmittedApplicationsView,
};
pub use chat::ChatView;
pub use dashboard::DashboardView;
pub use jobs::{JobDetailView, JobEditorView, JobsListView};
pub use users::{
    BecomeEmployerView, SavedJobsView, UserJobsView, UserProfileView, UserSettingsView, UsersView,
};

/// Run `fetch` under a fresh ticket for `key` and return what the view
/// shows afterwards. If a newer fetch started meanwhile, its state wins.
pub(crate) async fn load_into<K, T, F>(
    slot: &ViewSlot<K, T>,
    key: K,
    copy: &ErrorCopy,
    fetch: F,
) -> ViewState<T>
where
    K: Clone + PartialEq,
    T: Clone,
    F: Future<Output = AppResult<T>>,
{
    let ticket = slot.begin(key);
    let result = fetch
        .await
        .map_err(|e| ViewError::from_app_error(&e, copy));
    slot.complete(&ticket, result);
    slot.state()
}

/// Map the outcome of a one-shot action (submit, delete, download)
pub(crate) fn settle<T>(result: AppResult<T>, copy: &ErrorCopy) -> Result<T, ViewError> {
    result.map_err(|e| ViewError::from_app_error(&e, copy))
}
